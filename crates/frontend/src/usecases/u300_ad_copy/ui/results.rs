use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use contracts::usecases::u300_ad_copy::AdCopy;
use leptos::prelude::*;

#[component]
pub fn AdCopyResults(ad_copy: AdCopy) -> impl IntoView {
    // index of the headline copied last, for the "Copied" hint
    let (copied, set_copied) = signal(None::<usize>);

    let headlines = ad_copy
        .headlines
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, headline)| {
            let text = headline.clone();
            view! {
                <div class="copy-row">
                    <p class="copy-row__text">{headline}</p>
                    <button
                        class="copy-row__button"
                        title="Copy headline"
                        on:click=move |_| {
                            copy_to_clipboard_with_callback(&text, move || {
                                let _ = set_copied.try_set(Some(index));
                                // reset after 2 seconds
                                leptos::task::spawn_local(async move {
                                    gloo_timers::future::TimeoutFuture::new(2000).await;
                                    let _ = set_copied.try_update(|c| *c = release_hint(*c, index));
                                });
                            });
                        }
                    >
                        {move || if copied.get() == Some(index) {
                            view! { <span class="copy-row__done">"Copied"</span> }.into_any()
                        } else {
                            icon("copy")
                        }}
                    </button>
                </div>
            }
        })
        .collect_view();

    let body_copy = ad_copy
        .body_copy
        .iter()
        .cloned()
        .map(|copy| view! { <div class="copy-row"><p class="copy-row__text">{copy}</p></div> })
        .collect_view();

    let ctas = ad_copy
        .call_to_actions
        .iter()
        .cloned()
        .map(|cta| view! { <span class="chip">{cta}</span> })
        .collect_view();

    let audiences = ad_copy
        .audiences()
        .into_iter()
        .map(|audience| {
            view! {
                <div class="copy-row copy-row--stacked">
                    <p class="copy-row__title">{audience.name}</p>
                    <p class="copy-row__meta">{format!("Age: {}", audience.age)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid grid--2">
            <div class="panel">
                <h3 class="panel__title">"Headlines"</h3>
                <div class="copy-list">{headlines}</div>
            </div>
            <div class="panel">
                <h3 class="panel__title">"Body Copy"</h3>
                <div class="copy-list">{body_copy}</div>
            </div>
            <div class="panel">
                <h3 class="panel__title">"Call-to-Actions"</h3>
                <div class="chip-list">{ctas}</div>
            </div>
            <div class="panel">
                <h3 class="panel__title">"Target Audiences"</h3>
                <div class="copy-list">{audiences}</div>
            </div>
        </div>
    }
}

/// Clears the hint of `index` unless another headline was copied since
fn release_hint(copied: Option<usize>, index: usize) -> Option<usize> {
    if copied == Some(index) {
        None
    } else {
        copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_hint() {
        assert_eq!(release_hint(Some(1), 1), None);
        // a newer copy keeps its hint
        assert_eq!(release_hint(Some(2), 1), Some(2));
        assert_eq!(release_hint(None, 0), None);
    }
}
