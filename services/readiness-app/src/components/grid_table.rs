//! Readiness grid table component

use crate::api::GridResponse;
use crate::components::test_cell::TestCell;
use crate::report_link::filter_context;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Filter context for report links, taken from the page's own query string
pub fn filter_vals_from_search(search: &str) -> String {
    filter_context(search)
}

/// Fetches /api/grid and renders one row per test, one cell per environment
#[component]
pub fn GridTable() -> impl IntoView {
    let location = use_location();
    let grid = Resource::new(
        || (),
        |_| async move { fetch_grid().await.unwrap_or_default() },
    );

    view! {
        <section>
            <Suspense fallback=move || view! { <p>"Loading readiness grid..."</p> }>
                {move || {
                    let filter_vals = filter_vals_from_search(&location.search.get());
                    grid.get().map(|data| {
                        if data.rows.is_empty() {
                            view! { <p>"No test results available."</p> }.into_any()
                        } else {
                            let GridResponse { base_path, environments, rows } = data;
                            view! {
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr style="border-bottom: 2px solid #dee2e6;">
                                            <th style="padding: 0.5rem; text-align: left;">"Test"</th>
                                            {environments.iter().map(|env| view! {
                                                <th style="padding: 0.5rem; text-align: center;">{env.clone()}</th>
                                            }).collect::<Vec<_>>()}
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|row| {
                                            let cells = environments.iter().enumerate().map(|(i, env)| {
                                                view! {
                                                    <TestCell
                                                        status=row.statuses.get(i).copied().flatten()
                                                        environment=env.clone()
                                                        test_id=row.test_id.clone()
                                                        filter_vals=filter_vals.clone()
                                                        component=row.component.clone()
                                                        capability=row.capability.clone()
                                                        test_name=row.test_name.clone()
                                                        base_path=base_path.clone()
                                                    />
                                                }
                                            }).collect::<Vec<_>>();
                                            view! {
                                                <tr style="border-bottom: 1px solid #dee2e6;">
                                                    <td style="padding: 0.5rem;">{row.test_name.clone()}</td>
                                                    {cells}
                                                </tr>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

async fn fetch_grid() -> Result<GridResponse, String> {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}/api/grid", origin);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        Ok(GridResponse::default())
    }
}
