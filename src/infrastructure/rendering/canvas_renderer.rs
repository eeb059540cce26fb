use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartFormatService, ChartModel, color_for_series},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};

/// Plot margins in CSS pixels; the tooltip hit-test shares them
pub const PLOT_LEFT: f64 = 60.0;
pub const PLOT_RIGHT: f64 = 20.0;
pub const PLOT_TOP: f64 = 60.0;
pub const PLOT_BOTTOM: f64 = 45.0;

/// Canvas 2D line-chart renderer - Infrastructure implementation.
/// Owns the canvas handle and the window resize listener; dropping the
/// renderer unregisters the listener, so repeated mounts never stack
/// duplicate handlers.
pub struct CanvasChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    formatter: ChartFormatService,
    _resize_listener: Option<EventListener>,
}

impl CanvasChartRenderer {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            width,
            height,
            formatter: ChartFormatService::new(),
            _resize_listener: None,
        }
    }

    /// Register a window resize callback owned by this renderer
    pub fn with_resize_listener<F>(mut self, on_resize: F) -> RenderingResult<Self>
    where
        F: Fn() + 'static,
    {
        let window = web_sys::window()
            .ok_or_else(|| AppError::RenderingError("Window not available".to_string()))?;
        self._resize_listener = Some(EventListener::new(&window, "resize", move |_| on_resize()));
        Ok(self)
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas element and 2D context
    fn get_canvas_context(&self) -> RenderingResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::RenderingError("Document not available".to_string()))?;

        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| {
                AppError::RenderingError(format!("Canvas #{} not found", self.canvas_id))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::RenderingError("Element is not a canvas".to_string()))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::RenderingError("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }

    /// Draw the full chart: title, legend, grid, axes and one polyline per
    /// aligned series. Gaps (None entries) are connected through, matching
    /// the connect-nulls behavior of the options.
    pub fn render(&self, model: &ChartModel) -> RenderingResult<()> {
        let (_canvas, context) = self.get_canvas_context()?;
        self.draw_background(&context);

        let chart = model.data();
        if chart.breakpoints.is_empty() {
            self.draw_empty_message(&context);
            return Ok(());
        }

        get_logger().debug(
            LogComponent::Infrastructure("CanvasChartRenderer"),
            &format!(
                "Rendering {} series over {} breakpoints",
                chart.series_count(),
                chart.breakpoints.len()
            ),
        );

        let (min_price, max_price) = self.formatter.axis_bounds(chart);
        let plot_width = self.width as f64 - PLOT_LEFT - PLOT_RIGHT;
        let plot_height = self.height as f64 - PLOT_TOP - PLOT_BOTTOM;
        let count = chart.breakpoints.len();

        let x_for = |index: usize| -> f64 {
            if count <= 1 {
                PLOT_LEFT + plot_width / 2.0
            } else {
                PLOT_LEFT + plot_width * index as f64 / (count - 1) as f64
            }
        };
        let y_for = |price: f64| -> f64 {
            PLOT_TOP + plot_height * (1.0 - (price - min_price) / (max_price - min_price))
        };

        self.draw_title(&context, &model.options.title);
        if model.options.show_legend {
            self.draw_legend(&context, model);
        }
        self.draw_grid(&context, chart, plot_height, &x_for)?;
        self.draw_y_ticks(&context, min_price, max_price, plot_width, plot_height);
        self.draw_axes(&context, model);

        for (index, series) in chart.aligned.iter().enumerate() {
            let color = JsValue::from(color_for_series(index));
            context.set_stroke_style(&color);
            context.set_fill_style(&color);
            context.set_line_width(2.0);

            // Connect through gaps: only Some entries become vertices
            context.begin_path();
            let mut started = false;
            for (i, price) in series.unit_prices.iter().enumerate() {
                let Some(price) = price else { continue };
                let (x, y) = (x_for(i), y_for(*price));
                if started {
                    context.line_to(x, y);
                } else {
                    context.move_to(x, y);
                    started = true;
                }
            }
            context.stroke();

            for (i, price) in series.unit_prices.iter().enumerate() {
                let Some(price) = price else { continue };
                context.begin_path();
                context
                    .arc(x_for(i), y_for(*price), 3.0, 0.0, std::f64::consts::TAU)
                    .map_err(|_| AppError::RenderingError("arc failed".to_string()))?;
                context.fill();
            }
        }

        Ok(())
    }

    /// Wipe the surface; shown when no plans are selected
    pub fn clear(&self) -> RenderingResult<()> {
        let (_canvas, context) = self.get_canvas_context()?;
        self.draw_background(&context);
        self.draw_empty_message(&context);
        Ok(())
    }

    fn draw_background(&self, context: &CanvasRenderingContext2d) {
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from("#ffffff"));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn draw_empty_message(&self, context: &CanvasRenderingContext2d) {
        context.set_fill_style(&JsValue::from("#999999"));
        context.set_font("14px sans-serif");
        context.set_text_align("center");
        let _ = context.fill_text(
            "Select plans to compare",
            self.width as f64 / 2.0,
            self.height as f64 / 2.0,
        );
    }

    fn draw_title(&self, context: &CanvasRenderingContext2d, title: &str) {
        context.set_fill_style(&JsValue::from("#333333"));
        context.set_font("bold 16px sans-serif");
        context.set_text_align("center");
        let _ = context.fill_text(title, self.width as f64 / 2.0, 24.0);
    }

    fn draw_legend(&self, context: &CanvasRenderingContext2d, model: &ChartModel) {
        context.set_font("12px sans-serif");
        context.set_text_align("left");

        let mut x = PLOT_LEFT;
        let y = PLOT_TOP - 18.0;
        for (index, name) in model.legend_entries().iter().enumerate() {
            context.set_fill_style(&JsValue::from(color_for_series(index)));
            context.fill_rect(x, y - 8.0, 12.0, 8.0);
            context.set_fill_style(&JsValue::from("#333333"));
            let _ = context.fill_text(name, x + 16.0, y);
            // no measure_text on purpose: a flat estimate keeps this cheap
            x += 24.0 + name.len() as f64 * 6.5;
        }
    }

    /// Dashed vertical split line plus a label for every breakpoint
    fn draw_grid(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &crate::domain::plan_data::NormalizedChart,
        plot_height: f64,
        x_for: &dyn Fn(usize) -> f64,
    ) -> RenderingResult<()> {
        let dash = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(4.0));
        context
            .set_line_dash(&dash)
            .map_err(|_| AppError::RenderingError("set_line_dash failed".to_string()))?;
        context.set_stroke_style(&JsValue::from("#cccccc"));
        context.set_line_width(1.0);
        context.set_fill_style(&JsValue::from("#333333"));
        context.set_font("11px sans-serif");
        context.set_text_align("center");

        for (index, label) in self.formatter.x_labels(chart).iter().enumerate() {
            let x = x_for(index);
            context.begin_path();
            context.move_to(x, PLOT_TOP);
            context.line_to(x, PLOT_TOP + plot_height);
            context.stroke();
            let _ = context.fill_text(label, x, PLOT_TOP + plot_height + 16.0);
        }

        context
            .set_line_dash(&js_sys::Array::new())
            .map_err(|_| AppError::RenderingError("set_line_dash failed".to_string()))?;
        Ok(())
    }

    fn draw_y_ticks(
        &self,
        context: &CanvasRenderingContext2d,
        min_price: f64,
        max_price: f64,
        plot_width: f64,
        plot_height: f64,
    ) {
        const TICKS: usize = 5;
        context.set_stroke_style(&JsValue::from("#eeeeee"));
        context.set_fill_style(&JsValue::from("#333333"));
        context.set_font("11px sans-serif");
        context.set_text_align("right");

        for tick in 0..=TICKS {
            let price = min_price + (max_price - min_price) * tick as f64 / TICKS as f64;
            let y = PLOT_TOP + plot_height * (1.0 - tick as f64 / TICKS as f64);
            context.begin_path();
            context.move_to(PLOT_LEFT, y);
            context.line_to(PLOT_LEFT + plot_width, y);
            context.stroke();
            let _ = context.fill_text(&format!("{:.1}", price), PLOT_LEFT - 6.0, y + 4.0);
        }
    }

    fn draw_axes(&self, context: &CanvasRenderingContext2d, model: &ChartModel) {
        let bottom = self.height as f64 - PLOT_BOTTOM;
        let right = self.width as f64 - PLOT_RIGHT;

        context.set_stroke_style(&JsValue::from("#000000"));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(PLOT_LEFT, PLOT_TOP);
        context.line_to(PLOT_LEFT, bottom);
        context.line_to(right, bottom);
        context.stroke();

        context.set_fill_style(&JsValue::from("#333333"));
        context.set_font("12px sans-serif");
        context.set_text_align("right");
        let _ = context.fill_text(&model.options.x_axis_label, right, bottom + 32.0);
        context.set_text_align("left");
        let _ = context.fill_text(&model.options.y_axis_label, 8.0, PLOT_TOP - 36.0);
    }
}

/// Map a canvas-local x coordinate back to the nearest breakpoint index.
/// Shared between the renderer's category axis and the tooltip hit-test.
pub fn breakpoint_index_at(x: f64, canvas_width: u32, breakpoint_count: usize) -> Option<usize> {
    if breakpoint_count == 0 {
        return None;
    }
    if breakpoint_count == 1 {
        return Some(0);
    }

    let plot_width = canvas_width as f64 - PLOT_LEFT - PLOT_RIGHT;
    if plot_width <= 0.0 {
        return None;
    }

    let step = plot_width / (breakpoint_count - 1) as f64;
    let index = ((x - PLOT_LEFT) / step).round();
    if index < 0.0 || index >= breakpoint_count as f64 {
        None
    } else {
        Some(index as usize)
    }
}
