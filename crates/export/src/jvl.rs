//! JVL input file writer.
//!
//! The input format is positional: keywords on their own line, followed by
//! numeric lines whose meaning depends on the keyword. Surfaces are written
//! in declaration order, each followed by its sections; every section lists
//! its airfoil file, optional `CLAF`, its control surfaces and its jet
//! bindings. Bodies come last. Airfoil and body coordinates go to companion
//! files named after the main file (`<main>.af<N>`, `<main>.fuse<N>`).

use std::path::{Path, PathBuf};

use jvl_config::WriterOptions;
use jvl_core::format::g8;
use jvl_geometry::{Airplane, Fuselage, JetParam, Wing, WingXSec};

use crate::{ExportError, suffixed, write_text};

const SURFACE_RULE: usize = 79;
const SECTION_RULE: usize = 50;
const BODY_RULE: usize = 50;

/// A file written next to the main input file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanionFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Rendered input file plus the airfoil and body files it references.
#[derive(Debug, Clone, PartialEq)]
pub struct JvlDocument {
    pub path: PathBuf,
    pub contents: String,
    pub companions: Vec<CompanionFile>,
}

impl JvlDocument {
    /// Write the companion files first, then the main file.
    pub fn write(&self) -> Result<(), ExportError> {
        for companion in &self.companions {
            write_text(&companion.path, &companion.contents)?;
        }
        write_text(&self.path, &self.contents)?;
        log::info!(
            "wrote {} with {} companion files",
            self.path.display(),
            self.companions.len()
        );
        Ok(())
    }
}

/// Serializes an [`Airplane`] under a set of [`WriterOptions`].
pub struct JvlWriter<'a> {
    airplane: &'a Airplane,
    options: &'a WriterOptions,
}

impl<'a> JvlWriter<'a> {
    pub fn new(airplane: &'a Airplane, options: &'a WriterOptions) -> Self {
        Self { airplane, options }
    }

    /// Render the input file that will live at `path`, without touching
    /// the filesystem.
    pub fn render(&self, path: &Path) -> Result<JvlDocument, ExportError> {
        let mut out = Lines::default();
        let mut companions = Vec::new();

        self.header(&mut out);

        let mut airfoil_counter = 0usize;
        for wing in &self.airplane.wings {
            self.surface(&mut out, wing);
            for (index, xsec) in wing.xsecs.iter().enumerate() {
                let af_path = suffixed(path, &format!(".af{airfoil_counter}"));
                airfoil_counter += 1;
                companions.push(CompanionFile {
                    path: af_path.clone(),
                    contents: xsec
                        .airfoil
                        .repanel(self.options.airfoil_points_per_side)
                        .to_dat(true),
                });
                self.section(&mut out, wing, index, xsec, &af_path)?;
            }
        }

        for (index, fuselage) in self.airplane.fuselages.iter().enumerate() {
            let body_path = suffixed(path, &format!(".fuse{index}"));
            companions.push(CompanionFile {
                path: body_path.clone(),
                contents: body_file(fuselage),
            });
            self.body(&mut out, fuselage, &body_path);
        }

        log::debug!(
            "rendered {} surfaces, {} sections, {} bodies",
            self.airplane.wings.len(),
            airfoil_counter,
            self.airplane.fuselages.len()
        );

        Ok(JvlDocument {
            path: path.to_path_buf(),
            contents: out.finish(),
            companions,
        })
    }

    /// Render and write the input file and its companions.
    pub fn write(&self, path: &Path) -> Result<JvlDocument, ExportError> {
        let document = self.render(path)?;
        document.write()?;
        Ok(document)
    }

    /// Reference and ground-effect values are written in shortest round-trip
    /// form rather than `%.8g`.
    fn header(&self, out: &mut Lines) {
        let airplane = self.airplane;
        let options = self.options;
        let [xr, yr, zr] = options.xyz_ref.unwrap_or(airplane.xyz_ref);

        out.line(&airplane.name);
        out.line("#Mach");
        out.line("0        ! replaced by the run-case Mach number");
        out.line("#IYsym   IZsym   Zsym");
        out.line(format!(
            "0       {}   {}",
            u8::from(options.ground_effect),
            options.ground_effect_height
        ));
        out.line("#Sref    Cref    Bref");
        out.line(format!(
            "{} {} {}",
            airplane.s_ref, airplane.c_ref, airplane.b_ref
        ));
        out.line("#Xref    Yref    Zref");
        out.line(format!("{xr} {yr} {zr}"));
        out.line("# CDp");
        out.line(options.airplane.profile_drag_coefficient.to_string());
    }

    fn surface(&self, out: &mut Lines, wing: &Wing) {
        let wing_options = self.options.wing_options(&wing.name);

        let mut spacing_line = format!(
            "{}   {}",
            wing_options.chordwise_resolution,
            wing_options.chordwise_spacing.code()
        );
        if wing_options.wing_level_spanwise_spacing {
            spacing_line.push_str(&format!(
                "   {}   {}",
                wing_options.spanwise_resolution,
                wing_options.spanwise_spacing.code()
            ));
        }

        out.rule('=', SURFACE_RULE);
        out.line("SURFACE");
        out.line(&wing.name);
        out.line("#Nchordwise  Cspace  [Nspanwise   Sspace]");
        out.line(spacing_line);
        out.blank();

        if let Some(component) = wing_options.component {
            out.line("COMPONENT");
            out.line(component.to_string());
            out.blank();
        }
        if wing.symmetric {
            out.line("YDUPLICATE");
            out.line("0");
            out.blank();
        }
        if wing_options.no_wake {
            out.line("NOWAKE");
            out.blank();
        }
        if wing_options.no_alpha_beta {
            out.line("NOALBE");
            out.blank();
        }
        if wing_options.no_load {
            out.line("NOLOAD");
            out.blank();
        }

        if self.options.jet {
            if let Some(param) = &wing.jet_param {
                jet_param(out, param);
                out.blank();
            }
        }
    }

    /// Controls are written for every section that declares them, the tip
    /// section included.
    fn section(
        &self,
        out: &mut Lines,
        wing: &Wing,
        index: usize,
        xsec: &WingXSec,
        af_path: &Path,
    ) -> Result<(), ExportError> {
        let wing_options = self.options.wing_options(&wing.name);
        let section_options = &self.options.section;

        let [x, y, z] = xsec.xyz_le;
        let mut def_line = format!(
            "{} {} {} {} {}",
            g8(x),
            g8(y),
            g8(z),
            g8(xsec.chord),
            g8(xsec.twist)
        );
        if !wing_options.wing_level_spanwise_spacing {
            def_line.push_str(&format!(
                "   {}   {}",
                section_options.spanwise_resolution,
                section_options.spanwise_spacing.code()
            ));
        }

        out.rule('-', SECTION_RULE);
        out.line("SECTION");
        out.line("#Xle    Yle    Zle     Chord   Ainc  [Nspanwise   Sspace]");
        out.line(def_line);
        out.blank();
        out.line("AFIL");
        out.line(af_path.display().to_string());
        out.blank();

        if self.options.claf {
            let claf_line = match section_options.cl_alpha_factor {
                Some(factor) => factor.to_string(),
                None => format!(
                    "{}  # 1 + 0.77 * max thickness",
                    1.0 + 0.77 * xsec.airfoil.max_thickness()
                ),
            };
            out.line("CLAF");
            out.line(claf_line);
            out.blank();
        }

        for surface in &xsec.control_surfaces {
            out.line("CONTROL");
            out.line("#name, gain, Xhinge, XYZhvec, SgnDup");
            out.line(format!(
                "{} 1 {} 0 0 0 {}",
                surface.name,
                g8(surface.hinge_x()),
                surface.sgn_dup()
            ));
            out.blank();
        }

        if self.options.jet {
            if !xsec.jet_controls.is_empty() && wing.jet_param.is_none() && xsec.jet_params.is_empty()
            {
                return Err(ExportError::MissingJetParam {
                    wing: wing.name.clone(),
                    section: index,
                });
            }
            for control in &xsec.jet_controls {
                out.line("JETCONTROL");
                out.line("#Djet  1.0   1.0  ! name, gain, SgnDup");
                out.line(format!(
                    "{} {:.3} {:.3}",
                    control.jet_name, control.gain, control.sgn_dup
                ));
                out.blank();
            }
            for param in &xsec.jet_params {
                jet_param(out, param);
                out.blank();
            }
        }

        Ok(())
    }

    fn body(&self, out: &mut Lines, fuselage: &Fuselage, body_path: &Path) {
        let options = &self.options.fuselage;
        out.rule('=', BODY_RULE);
        out.line("BODY");
        out.line(&fuselage.name);
        out.line(format!(
            "{} {}",
            options.panel_resolution,
            options.panel_spacing.code()
        ));
        out.blank();
        out.line("BFIL");
        out.line(body_path.display().to_string());
        out.blank();
        out.line("TRANSLATE");
        out.line(format!("0 {} 0", g8(fuselage.mean_y())));
        out.blank();
    }
}

fn jet_param(out: &mut Lines, param: &JetParam) {
    out.line("JETPARAM");
    out.line("#hdisk   fh   djet0   djet1   djet3");
    out.line(format!(
        "{:.3} {:.3} {:.3} {:.3} {:.6}",
        param.hdisk, param.fh, param.djet0, param.djet1, param.djet3
    ));
}

/// Body coordinate file: name, then the side-view outline.
pub fn body_file(fuselage: &Fuselage) -> String {
    let mut out = Lines::default();
    out.line(&fuselage.name);
    for [x, z] in fuselage.profile() {
        out.line(format!("{} {}", g8(x), g8(z)));
    }
    out.finish()
}

/// Line accumulator; every line is trimmed of surrounding whitespace.
#[derive(Default)]
struct Lines {
    text: String,
}

impl Lines {
    fn line(&mut self, text: impl AsRef<str>) {
        self.text.push_str(text.as_ref().trim());
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn rule(&mut self, fill: char, width: usize) {
        let mut rule = String::with_capacity(width + 1);
        rule.push('#');
        rule.extend(std::iter::repeat_n(fill, width));
        self.line(rule);
    }

    fn finish(self) -> String {
        self.text
    }
}
