use crate::app::TooltipData;
use crate::global_signals;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub status: RwSignal<String>,
    pub is_fetching: RwSignal<bool>,
    pub series_count: RwSignal<usize>,
    pub breakpoint_count: RwSignal<usize>,
    pub tooltip_data: RwSignal<Option<TooltipData>>,
    pub tooltip_visible: RwSignal<bool>,
    pub log_lines: RwSignal<Vec<String>>,
    pub log_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        status: create_rw_signal("Initializing...".to_string()),
        is_fetching: create_rw_signal(false),
        series_count: create_rw_signal(0),
        breakpoint_count: create_rw_signal(0),
        tooltip_data: create_rw_signal(None),
        tooltip_visible: create_rw_signal(false),
        log_lines: create_rw_signal(Vec::new()),
        log_paused: create_rw_signal(false),
    })
}

global_signals! {
    pub status_signal => status: String,
    pub is_fetching_signal => is_fetching: bool,
    pub series_count_signal => series_count: usize,
    pub breakpoint_count_signal => breakpoint_count: usize,
    pub tooltip_data_signal => tooltip_data: Option<TooltipData>,
    pub tooltip_visible_signal => tooltip_visible: bool,
    pub log_lines_signal => log_lines: Vec<String>,
    pub log_paused_signal => log_paused: bool,
}
