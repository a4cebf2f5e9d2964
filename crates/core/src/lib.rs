//! Core units, constants, and shared primitives for the JVL aircraft workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.81;
    /// Sea-level ISA air density (kg/m³).
    pub const RHO_SEA_LEVEL: f64 = 1.225;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Metres per inch.
    pub const INCH_M: f64 = 0.0254;
    /// Kilograms per pound-mass.
    pub const LBM_KG: f64 = 0.453_592_37;

    /// Convert inches to metres.
    #[inline]
    pub fn inches(v: f64) -> f64 {
        v * INCH_M
    }

    /// Convert pound-mass to kilograms.
    #[inline]
    pub fn pounds(v: f64) -> f64 {
        v * LBM_KG
    }

    /// Convert an inch-valued point to metres.
    #[inline]
    pub fn inches3(v: [f64; 3]) -> [f64; 3] {
        [inches(v[0]), inches(v[1]), inches(v[2])]
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }
}

/// One-dimensional sampling and interpolation.
pub mod interp {
    /// `n` evenly spaced samples from `start` to `stop`, both ends included.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                    .collect()
            }
        }
    }

    /// Piecewise-linear interpolation of `fp(xp)` at `x`.
    ///
    /// `xp` must be increasing. Values outside the table clamp to the end
    /// values, and `fp` is read only as far as `xp` extends.
    pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
        let n = xp.len().min(fp.len());
        if n == 0 {
            return f64::NAN;
        }
        if x <= xp[0] {
            return fp[0];
        }
        if x >= xp[n - 1] {
            return fp[n - 1];
        }
        for i in 1..n {
            if x <= xp[i] {
                let span = xp[i] - xp[i - 1];
                if span == 0.0 {
                    return fp[i];
                }
                let t = (x - xp[i - 1]) / span;
                return fp[i - 1] + t * (fp[i] - fp[i - 1]);
            }
        }
        fp[n - 1]
    }

    /// Arithmetic mean; zero for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Cosine-clustered samples on `[0, 1]`, dense at both ends.
    pub fn cosine_spacing(n: usize) -> Vec<f64> {
        linspace(0.0, std::f64::consts::PI, n)
            .into_iter()
            .map(|theta| 0.5 * (1.0 - theta.cos()))
            .collect()
    }
}

/// Number formatting shared by the solver file writers.
pub mod format {
    /// Format `value` like C's `%.<precision>g`.
    ///
    /// Keeps `precision` significant digits, strips trailing zeros and
    /// switches to scientific notation when the decimal exponent is below
    /// -4 or at least `precision`.
    pub fn general(value: f64, precision: usize) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        if value == 0.0 {
            return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
        }

        let precision = precision.max(1);
        let scientific = format!("{:.*e}", precision - 1, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => match e.parse::<i32>() {
                Ok(exp) => (m, exp),
                Err(_) => return scientific,
            },
            None => return scientific,
        };

        if exponent < -4 || exponent >= precision as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
            let fixed = format!("{:.*}", decimals, value);
            trim_fraction(&fixed).to_string()
        }
    }

    /// `%.8g`, the precision used for coordinates in solver input files.
    #[inline]
    pub fn g8(value: f64) -> String {
        general(value, 8)
    }

    fn trim_fraction(s: &str) -> &str {
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s
        }
    }
}
