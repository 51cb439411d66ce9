// Server-rendered dashboard page
use crate::application::chart_service::{ChartOutcome, ChartPanel};
use crate::application::selection_service::SelectOption;
use crate::domain::granularity::Granularity;
use crate::infrastructure::config::FigureSize;
use crate::infrastructure::svg_figure::render_svg;
use crate::presentation::shell::{ShellQuery, ShellState};
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

const SUBMIT_ON_CHANGE: &str = "this.form.submit()";

const STYLE: &str = "\
body { font-family: sans-serif; }
main { width: 50%; margin: 0 auto; padding: 20px; }
h1 { text-align: center; }
label { display: block; margin-top: 12px; }
select, input { margin-top: 4px; }
#charts-container { margin-top: 20px; }
.figure { margin-bottom: 16px; }
.message { padding: 8px 0; color: #555; }";

pub struct DashboardPage<'a> {
    pub title: &'a str,
    pub granularity: Granularity,
    pub figure_size: FigureSize,
    pub factories: &'a [SelectOption],
    pub devices: &'a [SelectOption],
    pub query: &'a ShellQuery,
    pub state: &'a ShellState,
    pub panel: &'a ChartPanel,
}

impl DashboardPage<'_> {
    fn range_inputs(&self) -> Markup {
        let range = &self.query.range;
        match self.granularity {
            Granularity::Date => html! {
                label { "Filter by date:" }
                input type="date" name="start_date" placeholder="Start"
                    value=[range.start_date.as_deref()] onchange=(SUBMIT_ON_CHANGE);
                input type="date" name="end_date" placeholder="End"
                    value=[range.end_date.as_deref()] onchange=(SUBMIT_ON_CHANGE);
            },
            Granularity::DateTime => html! {
                label { "Filter by date and time:" }
                input type="date" name="start_date" placeholder="Start (date)"
                    value=[range.start_date.as_deref()];
                input type="time" name="start_time" placeholder="Start (time)"
                    value=[range.start_time.as_deref()];
                input type="date" name="end_date" placeholder="End (date)"
                    value=[range.end_date.as_deref()];
                input type="time" name="end_time" placeholder="End (time)"
                    value=[range.end_time.as_deref()];
                button type="submit" name="apply" value="1" { "Apply" }
            },
        }
    }

    fn chart_outcome(&self, outcome: &ChartOutcome) -> Markup {
        match outcome {
            ChartOutcome::Rendered { figure } => match render_svg(figure, self.figure_size) {
                Ok(svg) => html! {
                    div.figure data-chart-id=(figure.chart_id) data-style=(figure.style.as_str())
                        data-points=(figure.x.len()) {
                        (PreEscaped(svg))
                    }
                },
                Err(e) => {
                    tracing::warn!(chart_id = figure.chart_id, "Failed to render chart: {}", e);
                    html! { div.message { "Chart '" (figure.title) "' could not be rendered" } }
                }
            },
            ChartOutcome::Empty { message, .. } => html! { div.message { (message) } },
        }
    }

    fn charts(&self) -> Markup {
        match self.panel {
            ChartPanel::NoDevice { message } | ChartPanel::NoCharts { message } => {
                html! { div.message { (message) } }
            }
            ChartPanel::Charts { charts } => html! {
                @for outcome in charts {
                    (self.chart_outcome(outcome))
                }
            },
        }
    }
}

fn dropdown(
    name: &str,
    placeholder: &str,
    options: &[SelectOption],
    selected: Option<u32>,
    submit: bool,
) -> Markup {
    html! {
        select name=(name) id=(format!("{}-dropdown", name))
            onchange=[submit.then_some(SUBMIT_ON_CHANGE)] {
            option value="" { (placeholder) }
            @for opt in options {
                option value=(opt.value) selected[selected == Some(opt.value)] { (opt.label) }
            }
        }
    }
}

impl Render for DashboardPage<'_> {
    fn render(&self) -> Markup {
        // The device dropdown drives the charts directly only in the date variant
        let device_submits = !self.granularity.requires_apply();
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    main {
                        h1 { (self.title) }
                        form method="get" action="/" {
                            label { "Select a factory:" }
                            (dropdown("factory", "Factory", self.factories, self.state.factory(), true))
                            label { "Select a device:" }
                            (dropdown("device", "Device", self.devices, self.state.device(), device_submits))
                            (self.range_inputs())
                        }
                        div #charts-container {
                            (self.charts())
                        }
                    }
                }
            }
        }
    }
}
