//! Progress Bar Component
//!
//! Four-segment 25/50/75/100 progress control for costume items.
//! Tapping the current segment steps back 25; tapping any other segment
//! jumps to it.

use leptos::prelude::*;

const STEPS: &[u8] = &[25, 50, 75, 100];

#[component]
pub fn ProgressBar(progress: u8, #[prop(into)] on_change: Callback<u8>) -> impl IntoView {
    view! {
        <div class="progress-bar" title="點擊切換進度">
            <div class="progress-label">
                <span class="progress-caption">"Completion"</span>
                <span class=move || {
                    if progress == 100 { "progress-value done" } else { "progress-value" }
                }>
                    {progress} "%"
                </span>
            </div>
            <div class="progress-segments">
                {STEPS.iter().map(|step| {
                    let step = *step;
                    let filled = progress >= step;
                    let current = progress == step;
                    view! {
                        <div
                            class=move || {
                                match (filled, current) {
                                    (_, true) => "progress-segment filled current",
                                    (true, false) => "progress-segment filled",
                                    (false, false) => "progress-segment",
                                }
                            }
                            on:click=move |ev| {
                                ev.stop_propagation();
                                let next = if current && step != 100 { step - 25 } else { step };
                                on_change.run(next);
                            }
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
