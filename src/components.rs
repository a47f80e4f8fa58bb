//! Pure Yew view components for the pace tools UI.
//!
//! The target table, the mode radio pair, the two converter readouts and the
//! pace hint. None of them hold state; the cards in `main.rs` own the inputs.

use pace_tools::{format_kph, format_pace, validate_pace, TargetMode, TargetRow};
use std::rc::Rc;
use yew::prelude::*;

/// Format a percentage the way it was typed: "110", "87.5".
fn format_percentage(pct: f64) -> String {
    format!("{}%", pct)
}

/// Renders the target table, or a prompt when there is nothing to show yet.
pub fn render_targets(rows: &[TargetRow]) -> Html {
    // Early return for empty results
    if rows.is_empty() {
        return html! {
            <div class="targets">
                <p class="no-results-message">{ "Enter a base pace to see targets." }</p>
            </div>
        };
    }

    html! {
        <div class="targets">
            <table class="target-table">
                <thead>
                    <tr>
                        <th>{ "%" }</th>
                        <th>{ "Pace (min/km)" }</th>
                        <th>{ "Treadmill (km/h)" }</th>
                    </tr>
                </thead>
                <tbody>
                    { rows.iter().enumerate().map(|(idx, row)| render_target_row(idx, row)).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

/// Renders a single target row. Keyed by position since percentages may repeat.
fn render_target_row(idx: usize, row: &TargetRow) -> Html {
    html! {
        <tr key={idx}>
            <td class="pct">{ format_percentage(row.percentage) }</td>
            <td>{ format_pace(row.pace_seconds) }</td>
            <td>{ format_kph(row.kph) }</td>
        </tr>
    }
}

/// Radio pair choosing how percentages are applied.
#[derive(Properties, PartialEq)]
pub struct ModeSelectorProps {
    pub mode: TargetMode,
    pub onchange: Callback<TargetMode>,
}

#[function_component(ModeSelector)]
pub fn mode_selector(props: &ModeSelectorProps) -> Html {
    let option = |mode: TargetMode, label: &'static str, note: &'static str| {
        let onchange = {
            let cb = props.onchange.clone();
            Callback::from(move |_: Event| cb.emit(mode))
        };
        html! {
            <label class="mode-option">
                <input type="radio"
                    name="mode"
                    value={mode.as_str()}
                    checked={props.mode == mode}
                    {onchange}
                />
                { "% of " }<strong>{ label }</strong>{ format!(" ({})", note) }
            </label>
        }
    };

    html! {
        <div class="mode-selector">
            { option(TargetMode::SpeedPercent, "speed", "recommended") }
            { option(TargetMode::PacePercent, "pace time", "less common") }
        </div>
    }
}

/// Explains why a pace field produces no output, if it doesn't.
#[derive(Properties, PartialEq)]
pub struct PaceHintProps {
    pub text: AttrValue,
}

#[function_component(PaceHint)]
pub fn pace_hint(props: &PaceHintProps) -> Html {
    match validate_pace(&props.text) {
        Ok(_) => html! {},
        Err(err) => html! { <p class="input-hint">{ err.to_string() }</p> },
    }
}

/// Output line under the speed field.
#[derive(Properties, PartialEq)]
pub struct PaceReadoutProps {
    pub pace_seconds: Option<f64>,
}

#[function_component(PaceReadout)]
pub fn pace_readout(props: &PaceReadoutProps) -> Html {
    html! {
        <div class="readout">
            { "Pace = " }<span class="value">{ format_pace(props.pace_seconds) }</span>
        </div>
    }
}

/// Output line under the pace field.
#[derive(Properties, PartialEq)]
pub struct SpeedReadoutProps {
    pub kph: Option<f64>,
}

#[function_component(SpeedReadout)]
pub fn speed_readout(props: &SpeedReadoutProps) -> Html {
    html! {
        <div class="readout">
            { "Set treadmill to ≈ " }<span class="value">{ format!("{} km/h", format_kph(props.kph)) }</span>
        </div>
    }
}

/// Target table wrapper so the rows only re-render when they change.
#[derive(Properties, PartialEq)]
pub struct TargetTableProps {
    pub rows: Rc<Vec<TargetRow>>,
}

#[function_component(TargetTable)]
pub fn target_table(props: &TargetTableProps) -> Html {
    render_targets(&props.rows)
}
