//! Coherent line drawing: tangent field setup and the iterative FDoG loop.
//!
//! The loop alternates filtering and recombination. After each filtering pass
//! except the last, detected lines are burnt into the working image (set to
//! black) and the image is blurred, which reinforces the lines found so far
//! for the next pass. The tangent field is computed once and never changes.

use crate::config::CldConfig;
use crate::etf::EdgeTangentField;
use crate::filter::FlowDog;
use crate::image::blur::gaussian_blur;
use crate::image::{ImageView, Raster};
use crate::post::anti_alias;
use crate::trace::{trace_event, trace_span};
use crate::util::par::for_each_row;
use crate::util::CldResult;

/// One line drawing run over a single image.
pub struct LineDrawing {
    working: Raster<u8>,
    etf: EdgeTangentField,
    filter: FlowDog,
    cfg: CldConfig,
}

impl LineDrawing {
    /// Validates `cfg`, builds the tangent field and refines it
    /// `cfg.etf_iterations` times.
    pub fn new(image: ImageView<'_, u8>, cfg: CldConfig) -> CldResult<Self> {
        cfg.validate()?;
        let _span = trace_span!(
            "line_drawing_init",
            width = image.width(),
            height = image.height(),
            etf_iterations = cfg.etf_iterations
        )
        .entered();

        let working = Raster::from_view(image)?;
        let mut etf = EdgeTangentField::build(image, cfg.parallel)?;
        etf.refine_n(cfg.etf_kernel, cfg.etf_iterations, cfg.parallel);
        let filter = FlowDog::new(&cfg)?;

        Ok(Self {
            working,
            etf,
            filter,
            cfg,
        })
    }

    /// Returns the refined tangent field.
    pub fn etf(&self) -> &EdgeTangentField {
        &self.etf
    }

    /// Returns the configuration of this run.
    pub fn config(&self) -> &CldConfig {
        &self.cfg
    }

    /// Returns the precomputed filter.
    pub fn filter(&self) -> &FlowDog {
        &self.filter
    }

    /// Runs `1 + fdog_iterations` filtering passes and returns the final
    /// drawing (`0` for lines, `255` for background unless anti-aliased).
    pub fn render(mut self) -> CldResult<Raster<u8>> {
        let _span = trace_span!("render", passes = self.cfg.fdog_iterations + 1).entered();

        let mut edges = self.filter.apply(&self.working, &self.etf)?;
        for pass in 1..=self.cfg.fdog_iterations {
            self.recombine(&edges)?;
            edges = self.filter.apply(&self.working, &self.etf)?;
            trace_event!("fdog_pass", pass = pass);
            // Full scan, tracing builds only.
            #[cfg(feature = "tracing")]
            trace_event!(
                "fdog_lines",
                lines = edges.data().iter().filter(|&&v| v == 0).count()
            );
        }

        if self.cfg.anti_alias {
            edges = anti_alias(&edges, self.cfg.blur_size, self.cfg.parallel)?;
        }
        Ok(edges)
    }

    /// Blackens the working image under every line pixel, then blurs it.
    fn recombine(&mut self, edges: &Raster<u8>) -> CldResult<()> {
        self.working.ensure_same_size(edges)?;
        let width = self.working.width();
        let parallel = self.cfg.parallel;

        for_each_row(self.working.data_mut(), width, parallel, |y, row| {
            for (px, &e) in row.iter_mut().zip(edges.row(y)) {
                if e == 0 {
                    *px = 0;
                }
            }
        });

        self.working = gaussian_blur(&self.working, self.cfg.blur_size, parallel)?;
        Ok(())
    }
}

/// Renders a line drawing of `image` in one call.
pub fn draw_lines(image: ImageView<'_, u8>, cfg: &CldConfig) -> CldResult<Raster<u8>> {
    LineDrawing::new(image, cfg.clone())?.render()
}
