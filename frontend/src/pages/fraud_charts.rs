use yew::prelude::*;

use crate::charts::{Bucket, FraudSeries};
use crate::models::PredictedTransaction;
use crate::plot::{self, Frame, Slice};

const LINE_STROKE: &str = "#3B82F6";
const BAR_FILL: &str = "#10B981";
const AREA_STROKE: &str = "#F59E0B";
const AREA_FILL: &str = "#FEEBC8";

#[derive(Properties, PartialEq)]
pub struct FraudChartsProps {
    pub data: Vec<PredictedTransaction>,
}

#[function_component(FraudCharts)]
pub fn fraud_charts(props: &FraudChartsProps) -> Html {
    let series = use_memo(|data| FraudSeries::from_records(data), props.data.clone());

    html! {
        <div class="mt-12 space-y-12">
            <section>
                <h2 class="text-2xl font-bold mb-4">{"Fraud Distribution by Category"}</h2>
                { pie_chart(&series.by_category) }
            </section>
            <section>
                <h2 class="text-2xl font-bold mb-4">{"Fraudulent Transactions by Hour"}</h2>
                { line_chart(&series.by_hour) }
            </section>
            <section>
                <h2 class="text-2xl font-bold mb-4">{"Fraud by Day of Week"}</h2>
                { bar_chart(&series.by_weekday) }
            </section>
            <section>
                <h2 class="text-2xl font-bold mb-4">{"Fraud by Month"}</h2>
                { area_chart(&series.by_month) }
            </section>
        </div>
    }
}

fn chart_svg(frame: &Frame, body: Html) -> Html {
    html! {
        <svg
            viewBox={format!("0 0 {} {}", frame.width, frame.height)}
            class="w-full h-[300px] bg-white rounded-xl shadow-sm"
            preserveAspectRatio="xMidYMid meet"
        >
            { body }
        </svg>
    }
}

fn axes(frame: &Frame, buckets: &[Bucket]) -> Html {
    let scale = plot::y_scale(buckets);
    let baseline = frame.baseline();
    html! {
        <g font-size="11" fill="#64748b">
            <line x1={frame.left.to_string()} y1={frame.top.to_string()} x2={frame.left.to_string()} y2={baseline.to_string()} stroke="#cbd5e1" />
            <line x1={frame.left.to_string()} y1={baseline.to_string()} x2={(frame.width - frame.right).to_string()} y2={baseline.to_string()} stroke="#cbd5e1" />
            { for plot::y_ticks(buckets).into_iter().map(|tick| {
                let y = frame.value_y(tick, scale);
                html! {
                    <text x={(frame.left - 6.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end">{ tick.to_string() }</text>
                }
            }) }
            { for buckets.iter().enumerate().map(|(i, b)| html! {
                <text x={frame.slot_x(i, buckets.len()).to_string()} y={(baseline + 18.0).to_string()} text-anchor="middle">{ b.label.clone() }</text>
            }) }
        </g>
    }
}

fn legend(color: &'static str) -> Html {
    html! {
        <div class="flex justify-center items-center gap-2 mt-2 text-sm" style={format!("color: {color}")}>
            <span class="inline-block w-3 h-3" style={format!("background: {color}")}></span>
            <span>{"count"}</span>
        </div>
    }
}

fn point_titles(buckets: &[Bucket], points: &[(f64, f64)], color: &'static str) -> Html {
    html! {
        { for buckets.iter().zip(points).map(|(b, (x, y))| html! {
            <circle cx={x.to_string()} cy={y.to_string()} r="3" fill={color}>
                <title>{ format!("{}: {}", b.label, b.count) }</title>
            </circle>
        }) }
    }
}

fn pie_chart(buckets: &[Bucket]) -> Html {
    let (cx, cy, r) = (360.0, 130.0, 100.0);
    let frame = Frame {
        height: 260.0,
        ..Frame::default()
    };
    let slices = plot::pie_slices(buckets, cx, cy, r);
    if slices.is_empty() {
        return html! { <p class="text-slate-500">{"No data"}</p> };
    }
    let total: u32 = buckets.iter().map(|b| b.count).sum();
    let body = html! {
        { for slices.into_iter().map(|slice| match slice {
            Slice::Whole { color } => html! {
                <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} fill={color} stroke="#fff">
                    <title>{ format!("{total}") }</title>
                </circle>
            },
            Slice::Arc { path, color } => html! {
                <path d={path} fill={color} stroke="#fff" />
            },
        }) }
    };

    html! {
        <>
            { chart_svg(&frame, body) }
            <ul class="flex flex-wrap justify-center gap-4 mt-3 text-sm">
                { for buckets.iter().enumerate().map(|(i, b)| {
                    let color = plot::palette_color(i);
                    html! {
                        <li class="flex items-center gap-2" style={format!("color: {color}")}>
                            <span class="inline-block w-3 h-3" style={format!("background: {color}")}></span>
                            { format!("{} ({})", b.label, b.count) }
                        </li>
                    }
                }) }
            </ul>
        </>
    }
}

fn line_chart(buckets: &[Bucket]) -> Html {
    let frame = Frame::default();
    let points = plot::points(buckets, &frame);
    let body = html! {
        <>
            { axes(&frame, buckets) }
            <polyline points={plot::polyline(&points)} fill="none" stroke={LINE_STROKE} stroke-width="2" />
            { point_titles(buckets, &points, LINE_STROKE) }
        </>
    };
    html! {
        <>
            { chart_svg(&frame, body) }
            { legend(LINE_STROKE) }
        </>
    }
}

fn bar_chart(buckets: &[Bucket]) -> Html {
    let frame = Frame::default();
    let body = html! {
        <>
            { axes(&frame, buckets) }
            { for plot::bars(buckets, &frame).into_iter().zip(buckets).map(|(bar, b)| html! {
                <rect x={bar.x.to_string()} y={bar.y.to_string()} width={bar.width.to_string()} height={bar.height.to_string()} fill={BAR_FILL}>
                    <title>{ format!("{}: {}", b.label, b.count) }</title>
                </rect>
            }) }
        </>
    };
    html! {
        <>
            { chart_svg(&frame, body) }
            { legend(BAR_FILL) }
        </>
    }
}

fn area_chart(buckets: &[Bucket]) -> Html {
    let frame = Frame::default();
    let points = plot::points(buckets, &frame);
    let body = html! {
        <>
            { axes(&frame, buckets) }
            <path d={plot::area_path(&points, frame.baseline())} fill={AREA_FILL} stroke="none" />
            <polyline points={plot::polyline(&points)} fill="none" stroke={AREA_STROKE} stroke-width="2" />
            { point_titles(buckets, &points, AREA_STROKE) }
        </>
    };
    html! {
        <>
            { chart_svg(&frame, body) }
            { legend(AREA_STROKE) }
        </>
    }
}
