use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::api_client::ApiError;
use crate::hooks::FetchState;
use crate::ui::toast::ToastContext;

/// Fetch on mount with a refetch callback for retry flows. Failures surface
/// as a toast in addition to the error state, since callers use this for
/// page-level (fatal) loads.
///
/// Every invocation carries a generation token: a response that resolves
/// after a newer request has started is discarded instead of overwriting
/// fresher state.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(|| 0u64);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            *generation.borrow_mut() += 1;
            let current = *generation.borrow();
            let generation = generation.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)().await;
                if *generation.borrow() != current {
                    log::debug!("Discarding stale response for superseded request");
                    return;
                }
                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        toast_ctx.show_error(err.to_string());
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

/// Re-fetch whenever `deps` changes. `None` resets to the idle state, so
/// callers can gate the fetch on a selection being made. Failures stay
/// local to the returned state (no toast); these are secondary loads that
/// degrade to a placeholder without taking the page down.
#[hook]
pub fn use_dependent_fetch<T, D, F, Fut>(deps: Option<D>, fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(FetchState::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let fetch_state = fetch_state.clone();
        let generation = generation.clone();

        use_effect_with(deps, move |deps| {
            *generation.borrow_mut() += 1;
            let current = *generation.borrow();

            match deps.clone() {
                None => fetch_state.set(FetchState::NotStarted),
                Some(deps) => {
                    fetch_state.set(FetchState::Loading);
                    let future = fetch_fn(deps);
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = future.await;
                        if *generation.borrow() != current {
                            log::debug!("Discarding stale response for superseded request");
                            return;
                        }
                        match result {
                            Ok(data) => fetch_state.set(FetchState::Success(data)),
                            Err(err) => {
                                log::warn!("Dependent fetch failed: {}", err);
                                fetch_state.set(FetchState::Error(err));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    fetch_state
}
