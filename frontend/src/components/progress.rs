use fit_tracker_lib::chart::ChartSeries;
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::progress_chart::ProgressChart;
use crate::query::{self, ALL_WORKOUTS};

/// Observable states of the history fetch.
pub enum FetchState {
    Loading,
    Loaded(ChartSeries),
    Failed(String),
}

pub enum ProgressMsg {
    Received(Result<ChartSeries, ApiError>),
    Refetch,
}

/// Progress page: fetches the full workout history through the query
/// cache and renders it as a weight-over-time chart.
pub struct Progress {
    state: FetchState,
}

impl Component for Progress {
    type Message = ProgressMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self::start_fetch(ctx);
        Self {
            state: FetchState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProgressMsg::Received(Ok(series)) => {
                self.state = FetchState::Loaded(series);
            }
            ProgressMsg::Received(Err(err)) => {
                error!(format!("Failed to fetch workout history: {err}"));
                self.state = FetchState::Failed(err.to_string());
            }
            ProgressMsg::Refetch => {
                query::query_cache().invalidate(ALL_WORKOUTS);
                Self::start_fetch(ctx);
                self.state = FetchState::Loading;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onrefresh = ctx.link().callback(|_| ProgressMsg::Refetch);

        html! {
            <div class="progress-page">
                <h1>{ "Progress" }</h1>
                <p>{ "View your progress over time." }</p>
                {
                    match &self.state {
                        FetchState::Loading => html! {
                            <div class="chart-placeholder" />
                        },
                        FetchState::Failed(message) => html! { <>
                            <p class="fetch-error">{ message.clone() }</p>
                            <button onclick={onrefresh}>{ "Retry" }</button>
                        </> },
                        FetchState::Loaded(series) if series.is_empty() => html! {
                            <p class="no-data">{ "No workout data yet" }</p>
                        },
                        FetchState::Loaded(series) => html! { <>
                            <ProgressChart series={series.clone()} />
                            <button onclick={onrefresh}>{ "Refresh" }</button>
                        </> },
                    }
                }
            </div>
        }
    }
}

impl Progress {
    fn start_fetch(ctx: &Context<Self>) {
        let cb = ctx.link().callback(ProgressMsg::Received);
        spawn_local(async move {
            let result = query::query_cache()
                .get_or_fetch(ALL_WORKOUTS, api::fetch_workout_history)
                .await
                .map(|records| ChartSeries::from_records(&records));
            cb.emit(result);
        });
    }
}
