//! Main module for the pace tools application using Yew.
//! Wires the input fields to the pace math and renders both cards.

use pace_tools::{compute_targets, kph_from_pace, pace_from_kph, parse_pace, TargetMode};
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{ModeSelector, PaceHint, PaceReadout, SpeedReadout, TargetTable};
use config::*;
use hooks::use_text_input;

/// Read a number field the way the browser hands it over; blank or junk is 0.
fn read_kph(text: &str) -> f64 {
    pace_tools::utils::parse_leading_float(text).unwrap_or(0.0)
}

// ──────────────────────────────────────────────────────────────────────────────

/// Treadmill speed ↔ pace converter card.
#[function_component(ConverterCard)]
fn converter_card() -> Html {
    let kph_input = use_text_input(&DEFAULT_KPH.to_string());
    let pace_input = use_text_input(DEFAULT_PACE);

    // Derived values, recomputed only when their own field changes
    let pace_from_speed = use_memo(kph_input.text.clone(), |text| pace_from_kph(read_kph(text)));
    let speed_from_pace = use_memo(pace_input.text.clone(), |text| {
        parse_pace(text.as_str()).and_then(kph_from_pace)
    });

    html! {
        <section class="card">
            <h2>{ "Treadmill speed ↔ pace" }</h2>
            <p class="card-intro">
                { "Convert between " }<strong>{ "km/h" }</strong>{ " and " }<strong>{ "min/km" }</strong>
                { ". Tip: 12.0 km/h ≈ 5:00 /km." }
            </p>
            <div class="form-grid">
                <div class="form-group">
                    <label for="kph">{ "Speed on treadmill (km/h)" }</label>
                    <input id="kph"
                        type="number"
                        step={KPH_STEP}
                        min={KPH_MIN}
                        value={kph_input.text.clone()}
                        oninput={kph_input.on_input.clone()}
                    />
                    <PaceReadout pace_seconds={*pace_from_speed} />
                </div>
                <div class="form-group">
                    <label for="pace">{ "Desired pace (min:sec per km)" }</label>
                    <input id="pace"
                        type="text"
                        placeholder={PACE_PLACEHOLDER}
                        value={pace_input.text.clone()}
                        oninput={pace_input.on_input.clone()}
                    />
                    <SpeedReadout kph={*speed_from_pace} />
                    <PaceHint text={pace_input.text.clone()} />
                </div>
            </div>
        </section>
    }
}

/// Percentage targets from a base pace card.
#[function_component(TargetsCard)]
fn targets_card() -> Html {
    let base_pace_input = use_text_input(DEFAULT_BASE_PACE);
    let percentages_input = use_text_input(DEFAULT_PERCENTAGES);
    let mode = use_state(|| DEFAULT_MODE);

    let rows = use_memo(
        (
            base_pace_input.text.clone(),
            percentages_input.text.clone(),
            *mode,
        ),
        |(base_pace, percentages, mode)| compute_targets(base_pace, percentages, *mode),
    );

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |new_mode: TargetMode| mode.set(new_mode))
    };

    html! {
        <section class="card">
            <h2>{ "Intervals & tempo from your base pace" }</h2>
            <p class="card-intro">
                { "Enter your usual easy/long-run pace to get targets at chosen percentages. " }
                <strong>{ "Recommended:" }</strong>
                { " use % of speed (so 110% is faster than base; 90% is slower)." }
            </p>
            <div class="form-grid">
                <div class="form-group">
                    <label for="base-pace">{ "Base pace (min:sec per km)" }</label>
                    <input id="base-pace"
                        type="text"
                        placeholder={BASE_PACE_PLACEHOLDER}
                        value={base_pace_input.text.clone()}
                        oninput={base_pace_input.on_input.clone()}
                    />
                    <PaceHint text={base_pace_input.text.clone()} />
                </div>
                <div class="form-group">
                    <label for="percentages">{ "Percentages" }</label>
                    <input id="percentages"
                        type="text"
                        value={percentages_input.text.clone()}
                        oninput={percentages_input.on_input.clone()}
                    />
                    <p class="input-help">{ "Comma or space separated (e.g., 60, 70, 80, 90, 100, 110)" }</p>
                </div>
            </div>

            <ModeSelector mode={*mode} onchange={on_mode_change} />

            <TargetTable {rows} />
        </section>
    }
}

/// Primary application component laying out both cards.
#[function_component]
pub fn App() -> Html {
    html! {
        <main class="pace-tools">
            <header>
                <h1>{ "Running Pace Tools" }</h1>
            </header>
            <ConverterCard />
            <TargetsCard />
            <footer>
                { "Pace↔Speed: km/h ↔ min/km use exact conversions. Percent targets default to % of speed (recommended for workouts)." }
            </footer>
        </main>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
