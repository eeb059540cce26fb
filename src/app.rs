use leptos::html::Canvas;
use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{
        PlanApplicationService, initialize_global_coordinator, with_global_coordinator,
        with_global_coordinator_mut,
    },
    domain::{
        chart::ChartFormatService,
        events::{ChartEvent, PlanDataEvent},
        logging::{LogComponent, LogEntry, Logger, get_logger, get_time_provider},
        plan_data::{CustomPlanInput, Operator, PlanSelector, PlanSeries},
    },
    global_state,
    infrastructure::{
        rendering::{CanvasChartRenderer, breakpoint_index_at},
        services::ConsoleLogger,
    },
};

const CHART_CANVAS_ID: &str = "plan-chart-canvas";
const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 520;

/// 🎯 Tooltip payload: one breakpoint band with every priced plan at it
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl TooltipData {
    pub fn new(x: f64, y: f64, text: String) -> Self {
        Self { x, y, text }
    }
}

/// 🌉 Bridge logger wiring domain::logging into the browser console AND the
/// in-page debug console signals
pub struct LeptosLogger {
    console: Option<ConsoleLogger>,
}

impl LeptosLogger {
    pub fn new() -> Self {
        Self { console: Some(ConsoleLogger::new_development()) }
    }

    /// Signal sink only, for contexts without a browser console
    pub fn headless() -> Self {
        Self { console: None }
    }
}

impl Default for LeptosLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        if let Some(console) = &self.console {
            console.log(entry.clone());
        }

        let timestamp_str = get_time_provider().format_timestamp(entry.timestamp);
        let formatted =
            format!("[{}] {} {}: {}", timestamp_str, entry.level, entry.component, entry.message);

        if !global_state::log_paused_signal().get_untracked() {
            global_state::log_lines_signal().update(|log_vec| {
                log_vec.push(formatted);
                // Keep the console bounded
                while log_vec.len() > 100 {
                    log_vec.remove(0);
                }
            });
        }
    }
}

/// Pause or resume the in-page console. The pause notice is logged while
/// the sink is still live and the resume notice after it is live again, so
/// both transitions stay visible on the page.
pub fn set_log_paused(paused: bool) {
    if paused {
        get_logger().info(LogComponent::Presentation("DebugConsole"), "🛑 Logging paused");
        global_state::log_paused_signal().set(true);
    } else {
        global_state::log_paused_signal().set(false);
        get_logger().info(LogComponent::Presentation("DebugConsole"), "▶️ Logging resumed");
    }
}

/// Fixed catalog of selectable remote plans: (operator, series key, label)
pub fn available_plans() -> Vec<(PlanSelector, &'static str)> {
    vec![
        (PlanSelector::new(Operator::Ctm, "simOnly"), "CTM - SIM-only monthly plan"),
        (
            PlanSelector::new(Operator::Ctm, "phonePlanWithoutPhonePrice"),
            "CTM - iPhone 16 Pro 256GB bundle (device price excluded)",
        ),
        (
            PlanSelector::new(Operator::Ctm, "phonePlan"),
            "CTM - iPhone 16 Pro 256GB bundle (device price included)",
        ),
        (PlanSelector::new(Operator::Ctm, "stuPlan"), "CTM - Student plan"),
        (PlanSelector::new(Operator::Ctm, "prepaidPackage"), "CTM - Prepaid card"),
        (PlanSelector::new(Operator::Ctmo, "publicPlanThree"), "CTMO - Three-region plan"),
        (PlanSelector::new(Operator::Ctmo, "publicPlanTwo"), "CTMO - Two-region plan"),
        (PlanSelector::new(Operator::Ctmo, "stuPlan"), "CTMO - Student plan"),
        (PlanSelector::new(Operator::Cmhk, "publicPlanThree"), "CMHK - One-card-three-regions plan"),
        (PlanSelector::new(Operator::Cmhk, "publicPlanTwo"), "CMHK - One-card-two-regions plan"),
        (PlanSelector::new(Operator::Cuhk, "publicPlanCN"), "CUHK - 5G ONE Greater Bay Area"),
        (PlanSelector::new(Operator::Cuhk, "noContractPlan"), "CUHK - Moon card (no contract)"),
        (
            PlanSelector::new(Operator::Three, "publicPlanThree"),
            "3 - 5G cross-region roaming monthly plan",
        ),
        (PlanSelector::new(Operator::Three, "diy"), "3 - DIY"),
        (PlanSelector::new(Operator::Free, "publicPlanCN"), "Free - 19.99 EUR"),
    ]
}

fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { trimmed.parse().ok() }
}

/// 🦀 Root component of the roaming-plan dashboard
#[component]
pub fn App() -> impl IntoView {
    let selected_plans = create_rw_signal::<Vec<PlanSelector>>(Vec::new());
    let custom_plans = create_rw_signal::<Vec<PlanSeries>>(Vec::new());

    view! {
        <style>
            {r#"
            .roamplan-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .stats-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .stats-item {
                text-align: center;
            }

            .stats-value {
                font-size: 24px;
                font-weight: 700;
                color: #72c685;
                font-family: 'Courier New', monospace;
            }

            .stats-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 5px;
            }

            .plan-picker, .custom-plan-form {
                background: rgba(255, 255, 255, 0.08);
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 10px;
                padding: 15px;
                margin-bottom: 20px;
            }

            .picker-title {
                display: block;
                color: #72c685;
                font-weight: bold;
                margin-bottom: 8px;
            }

            .picker-item {
                display: inline-flex;
                align-items: center;
                gap: 5px;
                margin: 4px 12px 4px 0;
                font-size: 14px;
                cursor: pointer;
            }

            .picker-section {
                margin-bottom: 10px;
            }

            .form-row {
                display: flex;
                flex-wrap: wrap;
                gap: 10px;
                align-items: center;
                margin-bottom: 8px;
            }

            .form-row input[type="text"] {
                background: rgba(0, 0, 0, 0.3);
                border: 1px solid #4a5d73;
                border-radius: 5px;
                color: white;
                padding: 6px 8px;
                width: 130px;
            }

            .form-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 7px 14px;
                border-radius: 5px;
                cursor: pointer;
            }

            .form-btn:hover {
                background: #5a6d83;
            }

            .form-error {
                color: #ff8080;
                font-size: 13px;
                margin-top: 5px;
            }

            .chart-container {
                position: relative;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .chart-wrapper {
                position: relative;
                display: inline-block;
            }

            .tooltip {
                position: absolute;
                background: rgba(0, 0, 0, 0.9);
                color: white;
                padding: 8px 12px;
                border-radius: 6px;
                font-size: 12px;
                font-family: 'Courier New', monospace;
                white-space: pre-line;
                pointer-events: none;
                z-index: 1000;
                border: 1px solid #4a5d73;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
                line-height: 1.4;
                transform: translate(10px, -100%);
            }

            .status {
                color: #72c685;
                font-size: 14px;
                text-align: center;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #4a5d73;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-btn:hover {
                background: #5a6d83;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
                border-radius: 3px;
            }
            "#}
        </style>
        <div class="roamplan-app">
            <Header />
            <PlanPicker selected_plans=selected_plans />
            <CustomPlanForm custom_plans=custom_plans />
            <ChartContainer selected_plans=selected_plans custom_plans=custom_plans />
            <DebugConsole />
        </div>
    }
}

/// 📊 Header with live chart statistics
#[component]
fn Header() -> impl IntoView {
    let series_count = global_state::series_count_signal();
    let breakpoint_count = global_state::breakpoint_count_signal();
    let is_fetching = global_state::is_fetching_signal();

    view! {
        <div class="header">
            <h1>"🌏 Roaming Plan Comparison"</h1>
            <p>"Unit price by total data volume • Leptos + Canvas"</p>

            <div class="stats-info">
                <div class="stats-item">
                    <div class="stats-value">
                        {move || series_count.get().to_string()}
                    </div>
                    <div class="stats-label">"Plans on chart"</div>
                </div>
                <div class="stats-item">
                    <div class="stats-value">
                        {move || breakpoint_count.get().to_string()}
                    </div>
                    <div class="stats-label">"Data breakpoints"</div>
                </div>
                <div class="stats-item">
                    <div class="stats-value">
                        {move || if is_fetching.get() { "🟡 FETCHING" } else { "🟢 IDLE" }}
                    </div>
                    <div class="stats-label">"Remote API"</div>
                </div>
            </div>
        </div>
    }
}

/// ☑️ Operator multi-select plus the plan list filtered by chosen operators
#[component]
fn PlanPicker(selected_plans: RwSignal<Vec<PlanSelector>>) -> impl IntoView {
    let selected_operators = create_rw_signal::<Vec<Operator>>(Vec::new());

    let toggle_operator = move |operator: Operator, checked: bool| {
        selected_operators.update(|operators| {
            if checked {
                if !operators.contains(&operator) {
                    operators.push(operator);
                }
            } else {
                operators.retain(|op| *op != operator);
            }
        });
        if !checked {
            // Hiding an operator also unselects its plans
            selected_plans.update(|plans| plans.retain(|plan| plan.operator != operator));
        }
    };

    view! {
        <div class="plan-picker">
            <div class="picker-section">
                <span class="picker-title">"Operators"</span>
                {Operator::iter()
                    .map(|operator| {
                        view! {
                            <label class="picker-item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected_operators.get().contains(&operator)
                                    on:change=move |ev| toggle_operator(operator, event_target_checked(&ev))
                                />
                                {operator.to_string()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="picker-section">
                <span class="picker-title">"Plans"</span>
                <For
                    each=move || {
                        let operators = selected_operators.get();
                        available_plans()
                            .into_iter()
                            .filter(|(selector, _)| operators.contains(&selector.operator))
                            .collect::<Vec<_>>()
                    }
                    key=|(selector, _)| selector.clone()
                    children=move |(selector, label)| {
                        let checked_selector = selector.clone();
                        view! {
                            <label class="picker-item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        selected_plans.get().contains(&checked_selector)
                                    }
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected_plans
                                            .update(|plans| {
                                                if checked {
                                                    if !plans.contains(&selector) {
                                                        plans.push(selector.clone());
                                                    }
                                                } else {
                                                    plans.retain(|plan| *plan != selector);
                                                }
                                            });
                                    }
                                />
                                {label}
                            </label>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// ➕ Custom flat-rate plan form with device-bundle fields
#[component]
fn CustomPlanForm(custom_plans: RwSignal<Vec<PlanSeries>>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (volume, set_volume) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (is_phone_plan, set_is_phone_plan) = create_signal(false);
    let (upfront, set_upfront) = create_signal(String::new());
    let (phone_price, set_phone_price) = create_signal(String::new());
    let (months, set_months) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(Option::<String>::None);

    let add_plan = move |_| {
        let input = CustomPlanInput {
            name: name.get_untracked().trim().to_string(),
            total_data_volume: parse_field(&volume.get_untracked()),
            plan_price: parse_field(&price.get_untracked()),
            is_phone_plan: is_phone_plan.get_untracked(),
            upfront_payment: parse_field(&upfront.get_untracked()).unwrap_or(0.0),
            phone_price: parse_field(&phone_price.get_untracked()).unwrap_or(0.0),
            contract_months: parse_field(&months.get_untracked()).unwrap_or(0.0),
        };

        let mut service = PlanApplicationService::new();
        service.events_mut().subscribe_to_plan_data_events(|event| match event {
            PlanDataEvent::CustomPlanAdded { name, unit_price } => {
                get_logger().info(
                    LogComponent::Presentation("CustomPlanForm"),
                    &format!("➕ Custom plan '{}' at {:.2} MOP, HKD/GB", name, unit_price),
                );
            }
            PlanDataEvent::CustomPlanRejected { reason } => {
                get_logger().warn(
                    LogComponent::Presentation("CustomPlanForm"),
                    &format!("🚫 Custom plan rejected: {}", reason),
                );
            }
            _ => {}
        });

        match service.add_custom_plan(&input) {
            Ok(series) => {
                custom_plans.update(|plans| plans.push(series));
                set_form_error.set(None);
                set_name.set(String::new());
                set_volume.set(String::new());
                set_price.set(String::new());
            }
            Err(error) => {
                set_form_error.set(Some(error.to_string()));
            }
        }
    };

    view! {
        <div class="custom-plan-form">
            <span class="picker-title">"Custom plan"</span>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Name (optional)"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Total data volume (GB)"
                    prop:value=volume
                    on:input=move |ev| set_volume.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Plan price (MOP/HKD)"
                    prop:value=price
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <label class="picker-item">
                    <input
                        type="checkbox"
                        prop:checked=is_phone_plan
                        on:change=move |ev| set_is_phone_plan.set(event_target_checked(&ev))
                    />
                    "Device bundle"
                </label>
            </div>
            <Show when=move || is_phone_plan.get()>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder="Upfront payment"
                        prop:value=upfront
                        on:input=move |ev| set_upfront.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Device price"
                        prop:value=phone_price
                        on:input=move |ev| set_phone_price.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Contract months"
                        prop:value=months
                        on:input=move |ev| set_months.set(event_target_value(&ev))
                    />
                </div>
            </Show>
            <div class="form-row">
                <button class="form-btn" on:click=add_plan>
                    "➕ Add custom plan"
                </button>
                <button
                    class="form-btn"
                    on:click=move |_| {
                        custom_plans.set(Vec::new());
                        set_form_error.set(None);
                    }
                >
                    "🗑️ Remove custom plans"
                </button>
            </div>
            <div class="form-error">{move || form_error.get()}</div>
        </div>
    }
}

/// 🎨 Canvas chart surface wired to the global coordinator
#[component]
fn ChartContainer(
    selected_plans: RwSignal<Vec<PlanSelector>>,
    custom_plans: RwSignal<Vec<PlanSeries>>,
) -> impl IntoView {
    let (renderer_ready, set_renderer_ready) = create_signal(false);
    let canvas_ref = create_node_ref::<Canvas>();

    // Attach coordinator + renderer once the canvas element exists
    create_effect(move |_| {
        if canvas_ref.get().is_some() && !renderer_ready.get_untracked() {
            initialize_global_coordinator(CHART_CANVAS_ID);

            // The header counters follow chart events, not the fetch path
            with_global_coordinator_mut(|coordinator| {
                coordinator.events_mut().subscribe_to_chart_events(|event| match event {
                    ChartEvent::ChartDataUpdated { breakpoint_count, series_count } => {
                        global_state::breakpoint_count_signal().set(*breakpoint_count);
                        global_state::series_count_signal().set(*series_count);
                    }
                    ChartEvent::ChartCleared => {
                        global_state::breakpoint_count_signal().set(0);
                        global_state::series_count_signal().set(0);
                    }
                    ChartEvent::StaleResultDiscarded { .. } => {}
                });
            });

            let renderer = CanvasChartRenderer::new(CHART_CANVAS_ID, CHART_WIDTH, CHART_HEIGHT)
                .with_resize_listener(|| {
                    let _ = with_global_coordinator_mut(|coordinator| {
                        coordinator.resize(CHART_WIDTH, CHART_HEIGHT)
                    });
                });

            match renderer {
                Ok(renderer) => {
                    with_global_coordinator_mut(|coordinator| coordinator.attach_renderer(renderer));
                    global_state::status_signal().set("Select plans to compare".to_string());
                    set_renderer_ready.set(true);
                }
                Err(error) => {
                    get_logger().error(
                        LogComponent::Presentation("ChartContainer"),
                        &format!("❌ Renderer setup failed: {}", error),
                    );
                    global_state::status_signal().set(format!("❌ {}", error));
                }
            }
        }
    });

    on_cleanup(|| {
        let _ = with_global_coordinator_mut(|coordinator| coordinator.teardown());
    });

    // Every selection change starts a fresh fetch-normalize cycle
    create_effect(move |_| {
        let selectors = selected_plans.get();
        let custom = custom_plans.get();
        if !renderer_ready.get() {
            return;
        }
        refresh_chart(selectors, custom);
    });

    // 🎯 Tooltip hit-testing against the shared breakpoint axis
    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let mouse_x = event.offset_x() as f64;
        let mouse_y = event.offset_y() as f64;

        let tooltip = with_global_coordinator(|coordinator| {
            let model = coordinator.model();
            if !model.has_data() {
                return None;
            }
            let width = coordinator.canvas_width().unwrap_or(CHART_WIDTH);
            let index = breakpoint_index_at(mouse_x, width, model.breakpoint_count())?;
            let text = ChartFormatService::new().tooltip_text(model.data(), index);
            Some(TooltipData::new(mouse_x, mouse_y, text))
        })
        .flatten();

        match tooltip {
            Some(data) => {
                global_state::tooltip_data_signal().set(Some(data));
                global_state::tooltip_visible_signal().set(true);
            }
            None => global_state::tooltip_visible_signal().set(false),
        }
    };

    let handle_mouse_leave = move |_event: web_sys::MouseEvent| {
        global_state::tooltip_visible_signal().set(false);
    };

    view! {
        <div class="chart-container">
            <div class="chart-wrapper">
                <canvas
                    id=CHART_CANVAS_ID
                    node_ref=canvas_ref
                    width=CHART_WIDTH
                    height=CHART_HEIGHT
                    style="border: 2px solid #4a5d73; border-radius: 10px; background: #2c3e50; cursor: crosshair;"
                    on:mousemove=handle_mouse_move
                    on:mouseleave=handle_mouse_leave
                />
                <ChartTooltip />
            </div>
            <div class="status">
                {move || global_state::status_signal().get()}
            </div>
        </div>
    }
}

/// Begin a request generation, fetch, normalize and apply with
/// last-write-wins; stale cycles never touch the chart.
fn refresh_chart(selectors: Vec<PlanSelector>, custom: Vec<PlanSeries>) {
    let Some(request_id) = with_global_coordinator(|coordinator| coordinator.begin_request())
    else {
        return;
    };

    global_state::is_fetching_signal().set(true);
    global_state::status_signal().set(format!("📡 Loading {} plan(s)...", selectors.len()));

    spawn_local(async move {
        let mut service = PlanApplicationService::new();
        service.events_mut().subscribe_to_plan_data_events(|event| {
            if let PlanDataEvent::PlanDataFetchFailed { reason } = event {
                get_logger().error(
                    LogComponent::Presentation("ChartContainer"),
                    &format!("❌ Plan fetch failed: {}", reason),
                );
            }
        });

        let mut fetch_failed = false;
        let remote = match service.load_plan_series(&selectors).await {
            Ok(series) => series,
            Err(error) => {
                // Remote failure falls back to an empty result so custom
                // plans stay visible and an empty chart is cleared
                fetch_failed = true;
                global_state::status_signal().set(format!("❌ Plan fetch failed: {}", error));
                Vec::new()
            }
        };

        let chart = service.normalize(&remote, &custom);
        let breakpoint_count = chart.breakpoints.len();
        let series_count = chart.series_count();

        global_state::is_fetching_signal().set(false);

        let applied = with_global_coordinator_mut(|coordinator| {
            coordinator.apply_result(request_id, chart)
        })
        .unwrap_or(false);

        if applied {
            if breakpoint_count > 0 {
                global_state::status_signal().set(format!(
                    "✅ Comparing {} plan(s) over {} breakpoint(s)",
                    series_count, breakpoint_count
                ));
            } else if !fetch_failed {
                global_state::status_signal().set("Select plans to compare".to_string());
            }
        }
    });
}

/// 🎯 Tooltip element following the mouse inside the chart wrapper
#[component]
fn ChartTooltip() -> impl IntoView {
    let tooltip_visible = global_state::tooltip_visible_signal();
    let tooltip_data = global_state::tooltip_data_signal();

    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip_visible.get() { "block" } else { "none" }
            style:left=move || {
                tooltip_data
                    .with(|data| {
                        data.as_ref().map(|t| format!("{}px", t.x)).unwrap_or_else(|| "0px".to_string())
                    })
            }
            style:top=move || {
                tooltip_data
                    .with(|data| {
                        data.as_ref().map(|t| format!("{}px", t.y)).unwrap_or_else(|| "0px".to_string())
                    })
            }
        >
            {move || tooltip_data.with(|data| data.as_ref().map(|t| t.text.clone()).unwrap_or_default())}
        </div>
    }
}

/// 🐛 Debug console fed by the LeptosLogger bridge
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = global_state::log_lines_signal();
    let is_paused = global_state::log_paused_signal();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <button
                    on:click=move |_| set_log_paused(!is_paused.get())
                    class="debug-btn"
                >
                    {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                </button>
                <button
                    on:click=move |_| {
                        logs.set(Vec::new());
                        get_logger().info(
                            LogComponent::Presentation("DebugConsole"),
                            "🗑️ Log history cleared"
                        );
                    }
                    class="debug-btn"
                >
                    "🗑️ Clear"
                </button>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|log| log.clone()
                    children=move |log| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}
