use common::Metric;
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Hand serialized traces and layout over to Plotly.
fn draw(div_id: &str, traces: &[String], layout: &Layout) {
    let data = js_sys::Array::new();
    for trace in traces {
        let trace_js = js_sys::JSON::parse(trace).unwrap();
        data.push(&trace_js);
    }

    let layout_json = serde_json::to_string(layout).unwrap();
    let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

    newPlot(div_id, data.into(), layout_js);
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    /// Month labels, oldest first.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub metric: Metric,
}

/// Line chart of one metric over time.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let labels = props.labels.clone();
    let values = props.values.clone();
    let metric = props.metric;

    use_effect_with(
        (container_ref.clone(), labels, values, metric),
        move |(container_ref, labels, values, metric)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("trend-chart");

                let trace = Scatter::new(labels.clone(), values.clone())
                    .mode(Mode::LinesMarkers)
                    .name(metric.label())
                    .line(Line::new().color(metric.chart_color()).width(2.0));

                let layout = Layout::new()
                    .x_axis(Axis::new().title(Title::with_text("Month")))
                    .y_axis(Axis::new().title(Title::with_text(metric.label())))
                    .height(400);

                let trace_json = serde_json::to_string(&trace).unwrap();
                draw("trend-chart", &[trace_json], &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    /// District names in rank order.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub metric: Metric,
}

/// Bar chart of one metric across the compared districts.
#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &ComparisonChartProps) -> Html {
    let container_ref = use_node_ref();
    let labels = props.labels.clone();
    let values = props.values.clone();
    let metric = props.metric;

    use_effect_with(
        (container_ref.clone(), labels, values, metric),
        move |(container_ref, labels, values, metric)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("comparison-chart");

                let trace = Bar::new(labels.clone(), values.clone())
                    .name(metric.label())
                    .marker(Marker::new().color(metric.chart_color()));

                let layout = Layout::new()
                    .x_axis(Axis::new().title(Title::with_text("District")))
                    .y_axis(Axis::new().title(Title::with_text(metric.label())))
                    .height(400);

                let trace_json = serde_json::to_string(&trace).unwrap();
                draw("comparison-chart", &[trace_json], &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
