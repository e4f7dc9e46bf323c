use fit_tracker_lib::date_format;
use fit_tracker_lib::validate::{Field, FieldError};
use fit_tracker_lib::workout::WorkoutDraft;
use fit_tracker_lib::workout_log::WorkoutLog;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum WorkoutsMsg {
    Edit(Field, String),
    Submit,
}

/// Workout entry page: validated form on top, the session log below.
/// The log lives only as long as this component, a reload starts empty.
pub struct Workouts {
    draft: WorkoutDraft,
    errors: Vec<FieldError>,
    log: WorkoutLog,
}

impl Component for Workouts {
    type Message = WorkoutsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: WorkoutDraft::default(),
            errors: Vec::new(),
            log: WorkoutLog::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WorkoutsMsg::Edit(field, value) => {
                match field {
                    Field::ExerciseName => self.draft.exercise_name = value,
                    Field::Sets => self.draft.sets = value,
                    Field::Reps => self.draft.reps = value,
                    Field::Weight => self.draft.weight = value,
                    Field::Date => self.draft.date = value,
                }
            }
            WorkoutsMsg::Submit => match self.log.submit(&self.draft) {
                Ok(()) => {
                    self.draft = WorkoutDraft::default();
                    self.errors.clear();
                }
                // Form values stay put so the viewer can correct them
                Err(errors) => self.errors = errors,
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            WorkoutsMsg::Submit
        });

        html! {
            <div class="workouts-page">
                <div class="card">
                    <h1>{ "Log Workout" }</h1>
                    <form {onsubmit}>
                        { self.field_input(ctx, Field::ExerciseName, "Exercise Name", "text", &self.draft.exercise_name) }
                        { self.field_input(ctx, Field::Sets, "Sets", "number", &self.draft.sets) }
                        { self.field_input(ctx, Field::Reps, "Reps", "number", &self.draft.reps) }
                        { self.field_input(ctx, Field::Weight, "Weight (kg)", "number", &self.draft.weight) }
                        { self.field_input(ctx, Field::Date, "Date", "date", &self.draft.date) }
                        <button type="submit">{ "Log Workout" }</button>
                    </form>
                </div>
                { self.view_log() }
            </div>
        }
    }
}

impl Workouts {
    fn field_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        input_type: &'static str,
        value: &str,
    ) -> Html {
        let oninput = ctx.link().callback(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            WorkoutsMsg::Edit(field, input.value())
        });

        html! {
            <div class="form-field">
                <label>{ label }</label>
                <input type={input_type} value={value.to_string()} {oninput} />
                if let Some(err) = self.errors.iter().find(|err| err.field == field) {
                    <p class="field-error">{ err.message }</p>
                }
            </div>
        }
    }

    fn view_log(&self) -> Html {
        html! {
            <div class="logged-workouts">
                <h2>{ "Logged Workouts" }</h2>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Exercise Name" }</th>
                            <th>{ "Sets" }</th>
                            <th>{ "Reps" }</th>
                            <th>{ "Weight (kg)" }</th>
                            <th>{ "Date" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.log.entries().iter().map(|entry| html! {
                            <tr>
                                <td>{ entry.exercise_name.clone() }</td>
                                <td>{ entry.sets }</td>
                                <td>{ entry.reps }</td>
                                <td>{ entry.weight }</td>
                                <td>{ date_format::locale_date(&entry.date) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}
