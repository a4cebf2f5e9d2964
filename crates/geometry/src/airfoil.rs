//! Unit-chord airfoil coordinates.

use std::fs;
use std::path::Path;

use jvl_core::interp::{cosine_spacing, interp};

use crate::GeometryError;

/// Points per side used when generating NACA sections.
const NACA_POINTS_PER_SIDE: usize = 100;

/// Airfoil described by Selig-ordered coordinates: upper trailing edge,
/// around the leading edge, back along the lower surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    pub name: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl Airfoil {
    pub fn new(name: impl Into<String>, coordinates: Vec<[f64; 2]>) -> Result<Self, GeometryError> {
        let name = name.into();
        if coordinates.len() < 3 {
            return Err(GeometryError::DegenerateAirfoil {
                name,
                points: coordinates.len(),
            });
        }
        Ok(Self { name, coordinates })
    }

    /// Generate a NACA 4-digit section from a name such as `NACA0012` or
    /// `naca 2412`.
    pub fn naca4(name: &str) -> Result<Self, GeometryError> {
        let digits = parse_naca4(name).ok_or_else(|| GeometryError::UnknownAirfoil(name.to_string()))?;
        let m = digits[0] as f64 / 100.0;
        let p = digits[1] as f64 / 10.0;
        let t = (digits[2] * 10 + digits[3]) as f64 / 100.0;

        let xs = cosine_spacing(NACA_POINTS_PER_SIDE);
        let mut upper = Vec::with_capacity(xs.len());
        let mut lower = Vec::with_capacity(xs.len());
        for &x in &xs {
            let yt = 5.0
                * t
                * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                    - 0.1036 * x.powi(4));
            let (yc, dyc) = if m == 0.0 || p == 0.0 {
                (0.0, 0.0)
            } else if x < p {
                (
                    m / p.powi(2) * (2.0 * p * x - x * x),
                    2.0 * m / p.powi(2) * (p - x),
                )
            } else {
                (
                    m / (1.0 - p).powi(2) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x),
                    2.0 * m / (1.0 - p).powi(2) * (p - x),
                )
            };
            let theta = dyc.atan();
            upper.push([x - yt * theta.sin(), yc + yt * theta.cos()]);
            lower.push([x + yt * theta.sin(), yc - yt * theta.cos()]);
        }

        Self::new(name.trim().to_string(), join_surfaces(upper, lower))
    }

    /// Parse the contents of a `.dat` file in Selig or Lednicer layout.
    ///
    /// The first line is taken as the name when it is not a coordinate pair;
    /// otherwise `fallback_name` is used.
    pub fn from_dat_str(contents: &str, fallback_name: &str) -> Result<Self, GeometryError> {
        let mut name: Option<String> = None;
        let mut rows: Vec<[f64; 2]> = Vec::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match parse_pair(line) {
                Some(pair) => rows.push(pair),
                None if name.is_none() && rows.is_empty() => name = Some(line.to_string()),
                None => {
                    return Err(GeometryError::ParseDat {
                        line: index + 1,
                        content: line.to_string(),
                    });
                }
            }
        }

        let name = name.unwrap_or_else(|| fallback_name.to_string());
        let lednicer_counts = match rows.first() {
            Some(&[nu, nl]) if nu > 1.0 && nl > 1.0 => Some((nu as usize, nl as usize)),
            _ => None,
        };
        let coordinates = match lednicer_counts {
            Some((nu, nl)) => lednicer_to_selig(&rows[1..], nu, nl),
            None => rows,
        };
        Self::new(name, coordinates)
    }

    /// Load a `.dat` coordinate file from disk.
    pub fn load_dat(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| GeometryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("airfoil");
        let airfoil = Self::from_dat_str(&contents, stem)?;
        log::debug!(
            "loaded airfoil `{}` ({} points) from {}",
            airfoil.name,
            airfoil.coordinates.len(),
            path.display()
        );
        Ok(airfoil)
    }

    fn leading_edge_index(&self) -> usize {
        self.coordinates
            .iter()
            .enumerate()
            .min_by(|a, b| a.1[0].total_cmp(&b.1[0]))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Upper surface, leading edge to trailing edge.
    pub fn upper(&self) -> Vec<[f64; 2]> {
        let le = self.leading_edge_index();
        self.coordinates[..=le].iter().rev().copied().collect()
    }

    /// Lower surface, leading edge to trailing edge.
    pub fn lower(&self) -> Vec<[f64; 2]> {
        let le = self.leading_edge_index();
        self.coordinates[le..].to_vec()
    }

    /// Largest upper-minus-lower surface distance, in chord fractions.
    pub fn max_thickness(&self) -> f64 {
        let upper = SurfaceTable::new(&self.upper());
        let lower = SurfaceTable::new(&self.lower());
        cosine_spacing(101)
            .into_iter()
            .map(|x| upper.at(x) - lower.at(x))
            .fold(0.0, f64::max)
    }

    /// Enclosed cross-section area for a unit chord.
    pub fn area(&self) -> f64 {
        let n = self.coordinates.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let [x0, y0] = self.coordinates[i];
            let [x1, y1] = self.coordinates[(i + 1) % n];
            twice_area += x0 * y1 - x1 * y0;
        }
        0.5 * twice_area.abs()
    }

    /// Length of the outline for a unit chord, trailing edge gap excluded.
    pub fn perimeter(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| ((w[1][0] - w[0][0]).powi(2) + (w[1][1] - w[0][1]).powi(2)).sqrt())
            .sum()
    }

    /// Resample both surfaces onto `n_points_per_side` cosine-spaced stations.
    pub fn repanel(&self, n_points_per_side: usize) -> Airfoil {
        let upper = SurfaceTable::new(&self.upper());
        let lower = SurfaceTable::new(&self.lower());
        let xs = cosine_spacing(n_points_per_side.max(2));
        let upper: Vec<[f64; 2]> = xs.iter().map(|&x| [x, upper.at(x)]).collect();
        let lower: Vec<[f64; 2]> = xs.iter().map(|&x| [x, lower.at(x)]).collect();
        Airfoil {
            name: self.name.clone(),
            coordinates: join_surfaces(upper, lower),
        }
    }

    /// Render the coordinates as `.dat` text.
    pub fn to_dat(&self, include_name: bool) -> String {
        let mut out = String::new();
        if include_name {
            out.push_str(&self.name);
            out.push('\n');
        }
        for [x, y] in &self.coordinates {
            out.push_str(&format!("{x:.6} {y:.6}\n"));
        }
        out
    }
}

/// Surface ordinates sorted by chordwise station for interpolation.
struct SurfaceTable {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SurfaceTable {
    fn new(points: &[[f64; 2]]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));
        Self {
            xs: sorted.iter().map(|p| p[0]).collect(),
            ys: sorted.iter().map(|p| p[1]).collect(),
        }
    }

    fn at(&self, x: f64) -> f64 {
        interp(x, &self.xs, &self.ys)
    }
}

/// Join LE→TE upper and lower surfaces into Selig order, dropping the
/// duplicated leading-edge point.
fn join_surfaces(upper: Vec<[f64; 2]>, lower: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    let mut coordinates: Vec<[f64; 2]> = upper.into_iter().rev().collect();
    let skip = match (coordinates.last(), lower.first()) {
        (Some(a), Some(b)) if a == b => 1,
        _ => 0,
    };
    coordinates.extend(lower.into_iter().skip(skip));
    coordinates
}

fn lednicer_to_selig(rows: &[[f64; 2]], n_upper: usize, n_lower: usize) -> Vec<[f64; 2]> {
    let n_upper = n_upper.min(rows.len());
    let upper = rows[..n_upper].to_vec();
    let lower: Vec<[f64; 2]> = rows[n_upper..].iter().take(n_lower).copied().collect();
    join_surfaces(upper, lower)
}

fn parse_pair(line: &str) -> Option<[f64; 2]> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse::<f64>().ok()?;
    let y = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some([x, y])
}

fn parse_naca4(name: &str) -> Option<[u32; 4]> {
    let lower = name.trim().to_ascii_lowercase();
    let digits: String = lower
        .strip_prefix("naca")?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if digits.len() != 4 {
        return None;
    }
    let mut out = [0u32; 4];
    for (slot, c) in out.iter_mut().zip(digits.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(out)
}
