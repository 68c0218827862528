//! galorient-plot - CDF chart rendering for galorient
//!
//! Draws one labeled line series per requested region onto a single chart
//! and persists the figure. Empty curves are skipped without error; a
//! request where every region is empty still produces a blank chart.
//! Output format follows the file extension (.svg or .png). The destination
//! path is only populated once the figure is fully composed: SVG renders to
//! an in-memory string written in one call, PNG renders to a temporary
//! sibling file renamed into place.
//!
//! The y axis keeps the label "P(M >= m)" of the program this tool
//! descends from, even though the plotted quantity is the ascending CDF
//! P(M <= m).

use galorient_regions::RegionLabel;
use galorient_stats::Ecdf;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while rendering a figure
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unsupported output format for '{path}' (expected .svg or .png)")]
    UnsupportedFormat { path: String },

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("failed to write {path}: {source}")]
    WriteFailed { path: String, source: io::Error },
}

/// Result type for rendering operations
pub type PlotResult<T> = Result<T, PlotError>;

/// Figure dimensions in pixels
#[derive(Clone, Copy, Debug)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
        }
    }
}

/// Render the CDF curves of the requested regions to `output`
///
/// Curves are drawn in the order given; empty curves are silently skipped,
/// and a fully empty request still persists a blank chart. Fails without
/// touching the output path when the extension names no supported format.
pub fn render(
    curves: &[(RegionLabel, Ecdf)],
    output: &Path,
    size: FigureSize,
) -> PlotResult<()> {
    let visible: Vec<(RegionLabel, &Ecdf)> = curves
        .iter()
        .filter(|(_, ecdf)| !ecdf.is_empty())
        .map(|(label, ecdf)| (*label, ecdf))
        .collect();

    let extension = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("svg") => {
            let mut buffer = String::new();
            {
                let root = SVGBackend::with_string(&mut buffer, (size.width, size.height))
                    .into_drawing_area();
                draw_chart(&root, &visible)?;
                root.present().map_err(|e| PlotError::Draw(e.to_string()))?;
            }
            fs::write(output, buffer).map_err(|source| PlotError::WriteFailed {
                path: output.display().to_string(),
                source,
            })
        }
        Some("png") => {
            let staging = output.with_extension("png.part");
            let drawn = {
                let root = BitMapBackend::new(&staging, (size.width, size.height))
                    .into_drawing_area();
                draw_chart(&root, &visible)
                    .and_then(|_| root.present().map_err(|e| PlotError::Draw(e.to_string())))
            };
            if let Err(e) = drawn {
                let _ = fs::remove_file(&staging);
                return Err(e);
            }
            fs::rename(&staging, output).map_err(|source| PlotError::WriteFailed {
                path: output.display().to_string(),
                source,
            })
        }
        _ => Err(PlotError::UnsupportedFormat {
            path: output.display().to_string(),
        }),
    }
}

/// Magnitude range spanning every visible curve, padded when degenerate
fn magnitude_range(curves: &[(RegionLabel, &Ecdf)]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (_, ecdf) in curves {
        if let (Some(min), Some(max)) = (ecdf.min(), ecdf.max()) {
            lo = lo.min(min);
            hi = hi.max(max);
        }
    }
    if lo > hi {
        // No curves at all: a blank chart still needs a finite axis.
        (0.0, 1.0)
    } else if lo == hi {
        // A single distinct magnitude still needs a non-empty axis.
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[(RegionLabel, &Ecdf)],
) -> PlotResult<()> {
    let draw_err = |e: DrawingAreaErrorKind<DB::ErrorType>| PlotError::Draw(e.to_string());

    root.fill(&WHITE).map_err(draw_err)?;

    let (x_min, x_max) = magnitude_range(curves);
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0f64..1.05f64)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("M")
        .y_desc("P(M >= m)")
        .draw()
        .map_err(draw_err)?;

    for (i, (label, ecdf)) in curves.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        chart
            .draw_series(LineSeries::new(ecdf.points(), &color))
            .map_err(draw_err)?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if !curves.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn out_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("galorient-plot-{}-{name}", std::process::id()))
    }

    fn curve(label: RegionLabel, magnitudes: &[f64]) -> (RegionLabel, Ecdf) {
        (label, Ecdf::from_magnitudes(magnitudes))
    }

    #[test]
    fn test_all_empty_renders_blank_chart() {
        let curves = vec![curve(RegionLabel::C, &[]), curve(RegionLabel::N, &[])];
        let path = out_path("empty.svg");
        render(&curves, &path, FigureSize::default()).unwrap();

        // No series and no legend entries, but a complete figure.
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unknown_extension_rejected_before_drawing() {
        let curves = vec![curve(RegionLabel::C, &[1.0, 2.0])];
        let path = out_path("figure.pdf");
        let err = render(&curves, &path, FigureSize::default()).unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedFormat { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_extension_rejected() {
        let curves = vec![curve(RegionLabel::C, &[1.0])];
        let err = render(&curves, &out_path("noext"), FigureSize::default()).unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_svg_render_with_empty_region_skipped() {
        let curves = vec![
            curve(RegionLabel::Ne, &[1.0, 2.0, 3.0]),
            curve(RegionLabel::Sw, &[]),
        ];
        let path = out_path("skip.svg");
        render(&curves, &path, FigureSize::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        // The one non-empty region shows up in the legend; the empty one
        // leaves no trace.
        assert!(svg.contains("NE"));
        assert!(!svg.contains("SW"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_single_sample_curve_renders() {
        let curves = vec![curve(RegionLabel::C, &[5.0])];
        let path = out_path("single.svg");
        render(&curves, &path, FigureSize::default()).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_magnitude_range_spans_curves() {
        let a = Ecdf::from_magnitudes(&[1.0, 4.0]);
        let b = Ecdf::from_magnitudes(&[-2.0, 3.0]);
        let curves = vec![(RegionLabel::N, &a), (RegionLabel::S, &b)];
        assert_eq!(magnitude_range(&curves), (-2.0, 4.0));
    }

    #[test]
    fn test_magnitude_range_defaults_when_no_curves() {
        assert_eq!(magnitude_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_magnitude_range_pads_degenerate() {
        let a = Ecdf::from_magnitudes(&[5.0, 5.0]);
        let curves = vec![(RegionLabel::C, &a)];
        assert_eq!(magnitude_range(&curves), (4.5, 5.5));
    }
}
