use std::cell::{Cell, RefCell};

use crate::domain::{
    chart::{ChartKind, ChartModel},
    errors::RenderingResult,
    events::{ChartEvent, EventDispatcher, InMemoryEventDispatcher},
    logging::{LogComponent, get_logger},
    plan_data::NormalizedChart,
};
use crate::infrastructure::rendering::CanvasChartRenderer;

/// Monotonic request generation counter backing the last-write-wins rule:
/// a fetch-normalize cycle may only be applied while its id is still the
/// most recently begun one.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding every in-flight one
    pub fn begin(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        self.latest.get() == request_id
    }

    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}

/// Application coordinator owning the chart surface: the model, the canvas
/// renderer (and its resize listener) and the request tracker live here as
/// one explicitly owned resource instead of loose globals.
pub struct ChartCoordinator {
    renderer: Option<CanvasChartRenderer>,
    model: ChartModel,
    tracker: RequestTracker,
    events: InMemoryEventDispatcher,
}

impl ChartCoordinator {
    pub fn new(chart_id: impl Into<String>) -> Self {
        Self {
            renderer: None,
            model: ChartModel::new(chart_id, ChartKind::Line),
            tracker: RequestTracker::new(),
            events: InMemoryEventDispatcher::new(),
        }
    }

    /// Attach the canvas renderer once the DOM node exists
    pub fn attach_renderer(&mut self, renderer: CanvasChartRenderer) {
        get_logger().info(
            LogComponent::Application("ChartCoordinator"),
            &format!("🎨 Renderer attached to #{}", self.model.id),
        );
        self.renderer = Some(renderer);
    }

    /// Drop the renderer and with it the window resize listener
    pub fn teardown(&mut self) {
        if self.renderer.take().is_some() {
            get_logger().info(
                LogComponent::Application("ChartCoordinator"),
                "🧹 Renderer detached, resize listener removed",
            );
        }
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    /// Current canvas width, for mapping mouse coordinates to breakpoints
    pub fn canvas_width(&self) -> Option<u32> {
        self.renderer.as_ref().map(|r| r.width())
    }

    pub fn events_mut(&mut self) -> &mut InMemoryEventDispatcher {
        &mut self.events
    }

    /// Begin a new fetch-normalize cycle, superseding in-flight ones
    pub fn begin_request(&self) -> u64 {
        self.tracker.begin()
    }

    /// Apply a completed cycle if it is still the latest one. Stale results
    /// are discarded wholesale, never merged. Returns whether the result
    /// was applied.
    pub fn apply_result(&mut self, request_id: u64, chart: NormalizedChart) -> bool {
        if !self.tracker.is_current(request_id) {
            get_logger().debug(
                LogComponent::Application("ChartCoordinator"),
                &format!(
                    "⏭️ Discarding stale result for request {} (latest is {})",
                    request_id,
                    self.tracker.latest()
                ),
            );
            self.events.publish_chart_event(ChartEvent::StaleResultDiscarded { request_id });
            return false;
        }

        if chart.breakpoints.is_empty() {
            self.model.clear();
            self.events.publish_chart_event(ChartEvent::ChartCleared);
        } else {
            self.events.publish_chart_event(ChartEvent::ChartDataUpdated {
                breakpoint_count: chart.breakpoints.len(),
                series_count: chart.series_count(),
            });
            self.model.set_data(chart);
        }

        if let Err(error) = self.render() {
            get_logger().error(
                LogComponent::Application("ChartCoordinator"),
                &format!("❌ Render failed: {}", error),
            );
        }
        true
    }

    /// Redraw the current model; clears the surface when there is no data
    pub fn render(&self) -> RenderingResult<()> {
        let Some(renderer) = &self.renderer else {
            return Ok(());
        };

        if self.model.has_data() {
            renderer.render(&self.model)
        } else {
            renderer.clear()
        }
    }

    /// Adopt new canvas dimensions and redraw
    pub fn resize(&mut self, width: u32, height: u32) -> RenderingResult<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.set_dimensions(width, height);
        }
        self.render()
    }
}

// Global coordinator instance (thread-local for WASM)
thread_local! {
    static GLOBAL_COORDINATOR: RefCell<Option<ChartCoordinator>> = const { RefCell::new(None) };
}

/// Initialize the global coordinator for the given canvas
pub fn initialize_global_coordinator(chart_id: &str) {
    GLOBAL_COORDINATOR.with(|global| {
        *global.borrow_mut() = Some(ChartCoordinator::new(chart_id));
    });
}

/// Read access to the global coordinator
pub fn with_global_coordinator<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&ChartCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow().as_ref().map(f))
}

/// Mutable access to the global coordinator
pub fn with_global_coordinator_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut ChartCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow_mut().as_mut().map(f))
}
