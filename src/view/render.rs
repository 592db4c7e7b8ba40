//! View Rendering
//!
//! Turns a [`ViewState`] into a layout, and a layout into terminal text.
//! Both steps are pure.

use crossterm::style::{Color, Stylize};

use super::{Emphasis, ViewState, LOADING_MESSAGE};
use crate::summary::ControlMaturityEntry;

pub const DASHBOARD_TITLE: &str = "Project GRC-MMAP Dashboard Overview";
pub const RISK_SECTION_TITLE: &str = "Risk Status by Rating";
pub const CONTROL_SECTION_TITLE: &str = "Control Maturity Status (Compliance Footprint)";
pub const TREND_FOOTER: &str =
    "*Finding Trend data loaded successfully (ready for chart visualization)*";

/// What the view shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedView {
    /// Loading indicator and nothing else
    Loading(String),
    /// Error line and nothing else
    Error(String),
    /// Populated dashboard
    Dashboard(DashboardLayout),
}

/// The populated dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub risk_section_title: &'static str,
    pub cards: Vec<RiskCard>,
    pub control_section_title: &'static str,
    pub rows: Vec<ControlRow>,
    pub footer: &'static str,
}

/// One card in the risk grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskCard {
    pub label: String,
    pub count: u64,
    pub emphasis: Emphasis,
}

impl RiskCard {
    pub fn text(&self) -> String {
        format!("{} — {}", self.label, self.count)
    }
}

/// One row of the control maturity list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRow {
    /// Display key; control names may repeat
    pub index: usize,
    pub control_name: String,
    pub findings_label: String,
}

impl ControlRow {
    pub fn text(&self) -> String {
        format!("{} — {}", self.control_name, self.findings_label)
    }
}

/// Build the layout for a state
pub fn render(state: &ViewState) -> RenderedView {
    match state {
        ViewState::Loading => RenderedView::Loading(LOADING_MESSAGE.to_string()),
        ViewState::Error(message) => RenderedView::Error(format!("Error: {}", message)),
        ViewState::Loaded(summary) => {
            let cards = summary
                .risks_by_rating
                .iter()
                .map(|risk| RiskCard {
                    label: format!("{} Risks", risk.rating),
                    count: risk.count,
                    emphasis: Emphasis::for_rating(&risk.rating),
                })
                .collect();

            let rows = control_rows(&summary.control_maturity);

            RenderedView::Dashboard(DashboardLayout {
                title: DASHBOARD_TITLE,
                risk_section_title: RISK_SECTION_TITLE,
                cards,
                control_section_title: CONTROL_SECTION_TITLE,
                rows,
                footer: TREND_FOOTER,
            })
        }
    }
}

/// Control list rows, keyed by position
pub fn control_rows(controls: &[ControlMaturityEntry]) -> Vec<ControlRow> {
    controls
        .iter()
        .enumerate()
        .map(|(index, control)| ControlRow {
            index,
            control_name: control.control_name.clone(),
            findings_label: format!("{} Findings Attached", control.finding_count),
        })
        .collect()
}

/// Terminal output options
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyle {
    pub color: bool,
}

impl Emphasis {
    /// Tailwind 600 shades
    fn color(self) -> Color {
        match self {
            Emphasis::Red => Color::Rgb { r: 220, g: 38, b: 38 },
            Emphasis::Orange => Color::Rgb { r: 234, g: 88, b: 12 },
            Emphasis::Green => Color::Rgb { r: 22, g: 163, b: 74 },
        }
    }
}

/// Render a state as terminal text
pub fn render_text(state: &ViewState, style: TextStyle) -> String {
    match render(state) {
        RenderedView::Loading(message) => message,
        RenderedView::Error(message) => {
            if style.color {
                message.with(Emphasis::Red.color()).to_string()
            } else {
                message
            }
        }
        RenderedView::Dashboard(layout) => dashboard_text(&layout, style),
    }
}

fn dashboard_text(layout: &DashboardLayout, style: TextStyle) -> String {
    let heading = |text: &str| {
        if style.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut lines = vec![
        heading(layout.title),
        "=".repeat(layout.title.chars().count()),
        String::new(),
        heading(layout.risk_section_title),
    ];

    for card in &layout.cards {
        let marker = if style.color {
            "▌".with(card.emphasis.color()).to_string()
        } else {
            "▌".to_string()
        };
        lines.push(format!("  {} {}", marker, card.text()));
    }
    lines.push(String::new());

    lines.push(heading(layout.control_section_title));
    lines.extend(layout.rows.iter().map(|row| format!("  {}", row.text())));
    lines.push(String::new());

    lines.push(layout.footer.to_string());

    lines.join("\n")
}
