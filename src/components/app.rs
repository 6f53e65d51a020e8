use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::arc_scroll_view::ArcScrollView;

const REFRESH_MS: i32 = 500;

/// Demo page: a single pull-to-refresh surface.
#[function_component(App)]
pub fn app() -> Html {
    let refreshing = use_state(|| false);

    let on_pull_complete = {
        let refreshing = refreshing.clone();
        Callback::from(move |_: ()| {
            refreshing.set(true);
            let Some(win) = web_sys::window() else {
                return;
            };
            let done = {
                let refreshing = refreshing.clone();
                Closure::once_into_js(move || refreshing.set(false))
            };
            if win
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    done.unchecked_ref(),
                    REFRESH_MS,
                )
                .is_err()
            {
                log::warn!("could not schedule refresh completion");
                refreshing.set(false);
            }
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; height:100vh;">
            <ArcScrollView style="flex:1; background-color:white;" on_pull_complete={on_pull_complete}>
                <div style="min-height:calc(100% + 1px); display:flex; flex-direction:column; align-items:center; justify-content:center; background-color:#fff;">
                    if *refreshing {
                        <div style="font-size:13px; color:#888; margin-bottom:8px;">{"Refreshing…"}</div>
                    }
                    <span style="font-size:16px;">{"Pull to refresh ↓"}</span>
                </div>
            </ArcScrollView>
        </div>
    }
}
