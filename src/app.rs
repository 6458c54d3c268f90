use leptos::*;
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

use crate::application::{MarginHistoryEntry, SpotHistoryEntry};
use crate::domain::logging::{get_logger, get_time_provider, LogComponent};
use crate::domain::pricing::HistoryRow;
use crate::global_state::globals;
use crate::infrastructure::ExchangeRateClient;

/// The three calculator tabs. Switching tabs never touches calculation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter)]
pub enum Tab {
    #[strum(serialize = "Gram Price")]
    Spot,
    #[strum(serialize = "Profit Margin")]
    Margin,
    #[strum(serialize = "Purity Analysis")]
    Breakdown,
}

/// Kicks off one independent rate fetch. A second click while one is pending
/// just starts another request; whichever outcome resolves last wins.
fn trigger_rate_refresh() {
    crate::log_info!(
        LogComponent::Presentation("RateBar"),
        "🔄 Refreshing USD/AED rate"
    );

    let g = globals();
    g.refreshing.set(true);
    g.session.update(|s| s.refresh_started());

    spawn_local(async move {
        let outcome = ExchangeRateClient::new().fetch_rate().await;
        globals().session.update(|s| s.apply_rate_fetch(outcome));

        // Keep the spin visible briefly so fast responses still read as a refresh.
        gloo_timers::future::TimeoutFuture::new(500).await;
        globals().refreshing.set(false);
    });
}

/// Root component of the gold pricing calculator
#[component]
pub fn App() -> impl IntoView {
    get_logger().info(
        LogComponent::Presentation("App"),
        "🥇 Gold pricing calculator mounted",
    );

    // Initial load behaves like a refresh: fetch once, fall back on failure.
    trigger_rate_refresh();

    view! {
        <style>
            {r#"
            .gold-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1c1c1e 0%, #2c2c2e 100%);
                min-height: 100vh;
                padding: 20px;
                color: #fff;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.06);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.12);
            }

            .rate-bar {
                display: flex;
                justify-content: center;
                align-items: center;
                gap: 12px;
                margin-top: 15px;
            }

            .status-live { color: #30d158; }
            .status-offline { color: #ff9500; }
            .status-updating { color: #fff; }

            .rate-input {
                width: 110px;
                background: rgba(0, 0, 0, 0.4);
                color: #d4af37;
                border: 1px solid #4a4a4c;
                border-radius: 8px;
                padding: 6px 10px;
                font-family: 'Courier New', monospace;
            }

            .refresh-btn {
                background: #3a3a3c;
                color: white;
                border: none;
                padding: 6px 12px;
                border-radius: 8px;
                cursor: pointer;
            }

            .refresh-btn.spinning { opacity: 0.6; }

            .tab-bar {
                display: flex;
                justify-content: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .tab-btn {
                background: #2c2c2e;
                color: #a0a0a0;
                border: 1px solid #4a4a4c;
                padding: 10px 18px;
                border-radius: 10px;
                cursor: pointer;
            }

            .tab-btn.active {
                background: #d4af37;
                color: #1c1c1e;
                font-weight: 700;
            }

            .panel {
                max-width: 640px;
                margin: 0 auto 20px;
                background: rgba(255, 255, 255, 0.06);
                border: 1px solid rgba(255, 255, 255, 0.12);
                border-radius: 15px;
                padding: 20px;
            }

            .field-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin: 10px 0;
                gap: 12px;
            }

            .field-row label { color: #a0a0a0; font-size: 14px; }

            .field-row input {
                width: 160px;
                background: rgba(0, 0, 0, 0.4);
                color: #fff;
                border: 1px solid #4a4a4c;
                border-radius: 8px;
                padding: 8px 10px;
            }

            .manual-badge { font-size: 11px; color: #a0a0a0; }

            .result-display {
                text-align: center;
                font-size: 32px;
                font-weight: 700;
                color: #d4af37;
                font-family: 'Courier New', monospace;
                margin: 16px 0;
            }

            .result-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 8px 20px;
                margin: 16px 0;
            }

            .res-label { color: #a0a0a0; font-size: 13px; }
            .res-value { font-family: 'Courier New', monospace; font-weight: 600; }

            .tone-positive { color: #30d158; }
            .tone-negative { color: #ff3b30; }
            .tone-neutral { color: #fff; }

            .purity-card {
                display: flex;
                justify-content: space-between;
                background: rgba(0, 0, 0, 0.3);
                border: 1px solid #4a4a4c;
                border-radius: 10px;
                padding: 10px 14px;
                margin: 6px 0;
            }

            .purity-point-label { color: #a0a0a0; font-size: 11px; display: block; }
            .purity-point-value { font-family: 'Courier New', monospace; }

            .purity-placeholder {
                text-align: center;
                color: #a0a0a0;
                padding: 20px;
            }

            .record-btn {
                display: block;
                margin: 10px auto 0;
                background: #d4af37;
                color: #1c1c1e;
                border: none;
                padding: 8px 20px;
                border-radius: 8px;
                font-weight: 700;
                cursor: pointer;
            }

            .history-section { margin-top: 16px; }

            .history-table {
                width: 100%;
                border-collapse: collapse;
                font-size: 13px;
            }

            .history-table th {
                color: #a0a0a0;
                text-align: left;
                padding: 6px;
                border-bottom: 1px solid #4a4a4c;
            }

            .history-table td {
                padding: 6px;
                border-bottom: 1px solid #3a3a3c;
                font-family: 'Courier New', monospace;
            }

            .history-result { color: #d4af37; font-weight: 700; }

            .delete-btn {
                background: none;
                border: none;
                color: #ff3b30;
                cursor: pointer;
            }
            "#}
        </style>
        <div class="gold-app">
            <Header />
            <TabBar />
            <SpotPanel />
            <MarginPanel />
            <BreakdownPanel />
        </div>
    }
}

/// Title plus the live-rate bar
#[component]
fn Header() -> impl IntoView {
    let session = globals().session;
    let refreshing = globals().refreshing;

    view! {
        <div class="header">
            <h1>"Gold Gram Pricing"</h1>
            <p>"USD/oz → AED/g • purity & resale margins"</p>

            <div class="rate-bar">
                <span class=move || session.with(|s| s.rate_status.css_class())>
                    {move || session.with(|s| s.rate_status.to_string())}
                </span>
                <input
                    class="rate-input"
                    type="number"
                    step="0.0001"
                    placeholder="USD → AED"
                    prop:value=move || session.with(|s| s.rate_field.clone())
                    on:input=move |ev| session.update(|s| s.edit_rate(&event_target_value(&ev)))
                />
                <button
                    class=move || if refreshing.get() { "refresh-btn spinning" } else { "refresh-btn" }
                    on:click=move |_| trigger_rate_refresh()
                >
                    "⟳ Refresh"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TabBar() -> impl IntoView {
    let active = globals().active_tab;

    view! {
        <div class="tab-bar">
            {Tab::iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == tab { "tab-btn active" } else { "tab-btn" }
                            }
                            on:click=move |_| active.set(tab)
                        >
                            {tab.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn panel_display(tab: Tab) -> &'static str {
    if globals().active_tab.get() == tab {
        "block"
    } else {
        "none"
    }
}

/// Category 1: ounce rate → local gram price at a given purity
#[component]
fn SpotPanel() -> impl IntoView {
    let session = globals().session;

    view! {
        <div class="panel" style:display=move || panel_display(Tab::Spot)>
            <div class="field-row">
                <label>"USD price"</label>
                <input
                    type="number"
                    prop:value=move || session.with(|s| s.spot.usd.clone())
                    on:input=move |ev| session.update(|s| s.edit_spot_usd(&event_target_value(&ev)))
                />
            </div>
            <div class="field-row">
                <label>"Ounce rate"</label>
                <input
                    type="number"
                    prop:value=move || session.with(|s| s.spot.ounce.clone())
                    on:input=move |ev| session.update(|s| s.edit_spot_ounce(&event_target_value(&ev)))
                />
            </div>
            <div class="field-row">
                <label>"Purity"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.spot.purity.clone())
                    on:input=move |ev| session.update(|s| s.edit_spot_purity(&event_target_value(&ev)))
                />
            </div>

            <div class="result-display">{move || session.with(|s| s.spot_result_text())}</div>

            <button
                class="record-btn"
                on:click=move |_| {
                    let label = get_time_provider().clock_label();
                    globals().session.update(|s| {
                        s.record_spot(label);
                    });
                }
            >
                "Record"
            </button>

            <SpotHistory />
        </div>
    }
}

#[component]
fn SpotHistory() -> impl IntoView {
    let session = globals().session;

    let spot_row = move |row: HistoryRow<SpotHistoryEntry>| {
        let id = row.id;
        view! {
            <tr>
                <td>{row.entry.time.clone()}</td>
                <td>{format!("${}", row.entry.usd)}</td>
                <td>{row.entry.ounce.clone()}</td>
                <td>{row.entry.purity.clone()}</td>
                <td>{row.entry.rate.clone()}</td>
                <td class="history-result">{row.entry.result.clone()}</td>
                <td>
                    <button
                        class="delete-btn"
                        on:click=move |_| {
                            globals().session.update(|s| s.spot_history.delete(id))
                        }
                    >
                        "✕"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div
            class="history-section"
            style:display=move || {
                if session.with(|s| s.spot_history.is_visible()) { "block" } else { "none" }
            }
        >
            <table class="history-table">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"USD"</th>
                        <th>"Ounce"</th>
                        <th>"Purity"</th>
                        <th>"Rate"</th>
                        <th>"Result"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || session.with(|s| s.spot_history.rows().to_vec())
                        key=|row| row.id
                        children=spot_row
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Category 2: sale, cost and profit for one purity
#[component]
fn MarginPanel() -> impl IntoView {
    let session = globals().session;
    let margin = move || session.with(|s| s.margin_view());

    view! {
        <div class="panel" style:display=move || panel_display(Tab::Margin)>
            <div class="field-row">
                <label>
                    "Gold price (18K)"
                    <span class="manual-badge">
                        {move || {
                            session.with(|s| {
                                if s.margin_price_overridden { " • Manual" } else { " • Linked" }
                            })
                        }}
                    </span>
                </label>
                <input
                    type="number"
                    step="0.0001"
                    prop:value=move || session.with(|s| s.margin.gold_price.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_margin_gold_price(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Item weight (g)"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.margin.item_weight.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_margin_item_weight(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Making cost"</label>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || session.with(|s| s.margin.making_cost.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_margin_making_cost(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Gold + stone weight (g)"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.margin.stone_weight.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_margin_stone_weight(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Purity"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.margin.purity.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_margin_purity(&event_target_value(&ev)))
                    }
                />
            </div>

            <div class="result-grid">
                <span class="res-label">"Pure price (24K)"</span>
                <span class="res-value">{move || margin().pure_price}</span>

                <span class="res-label">"Pure weight"</span>
                <span class="res-value">{move || margin().pure_weight}</span>

                <span class="res-label">"Sale amount"</span>
                <span class="res-value">{move || margin().sale_amount}</span>

                <span class="res-label">"Cost"</span>
                <span class="res-value">{move || margin().cost}</span>

                <span class="res-label">"Profit"</span>
                <span class=move || format!("res-value {}", margin().tone.css_class())>
                    {move || margin().profit}
                </span>

                <span class="res-label">"Profit %"</span>
                <span class=move || format!("res-value {}", margin().tone.css_class())>
                    {move || margin().profit_percent}
                </span>
            </div>

            <button
                class="record-btn"
                on:click=move |_| {
                    let label = get_time_provider().clock_label();
                    globals().session.update(|s| {
                        s.record_margin(label);
                    });
                }
            >
                "Record"
            </button>

            <MarginHistory />
        </div>
    }
}

#[component]
fn MarginHistory() -> impl IntoView {
    let session = globals().session;

    let margin_row = move |row: HistoryRow<MarginHistoryEntry>| {
        let id = row.id;
        let tone = row.entry.tone.css_class();
        view! {
            <tr>
                <td>{row.entry.time.clone()}</td>
                <td>{format!("{}g", row.entry.weight)}</td>
                <td>{row.entry.purity.clone()}</td>
                <td>{row.entry.sale_amount.clone()}</td>
                <td>{row.entry.cost.clone()}</td>
                <td class=tone>{row.entry.profit.clone()}</td>
                <td class=tone>{row.entry.profit_percent.clone()}</td>
                <td>
                    <button
                        class="delete-btn"
                        on:click=move |_| {
                            globals().session.update(|s| s.margin_history.delete(id))
                        }
                    >
                        "✕"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div
            class="history-section"
            style:display=move || {
                if session.with(|s| s.margin_history.is_visible()) { "block" } else { "none" }
            }
        >
            <table class="history-table">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"Weight"</th>
                        <th>"Purity"</th>
                        <th>"Sale"</th>
                        <th>"Cost"</th>
                        <th>"Profit"</th>
                        <th>"Profit %"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || session.with(|s| s.margin_history.rows().to_vec())
                        key=|row| row.id
                        children=margin_row
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Category 3: margin row per purity in the working set
#[component]
fn BreakdownPanel() -> impl IntoView {
    let session = globals().session;

    view! {
        <div class="panel" style:display=move || panel_display(Tab::Breakdown)>
            <div class="field-row">
                <label>
                    "Gold price (18K)"
                    <span class="manual-badge">
                        {move || {
                            session.with(|s| {
                                if s.breakdown_price_overridden { " • Manual" } else { " • Linked" }
                            })
                        }}
                    </span>
                </label>
                <input
                    type="number"
                    step="0.0001"
                    prop:value=move || session.with(|s| s.breakdown.gold_price.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_breakdown_gold_price(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Item weight (g)"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.breakdown.item_weight.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_breakdown_item_weight(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Making cost"</label>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || session.with(|s| s.breakdown.making_cost.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_breakdown_making_cost(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Gold + stone weight (g)"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.breakdown.stone_weight.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_breakdown_stone_weight(&event_target_value(&ev)))
                    }
                />
            </div>
            <div class="field-row">
                <label>"Manual purity (optional)"</label>
                <input
                    type="number"
                    step="0.001"
                    prop:value=move || session.with(|s| s.breakdown.manual_purity.clone())
                    on:input=move |ev| {
                        session.update(|s| s.edit_breakdown_manual_purity(&event_target_value(&ev)))
                    }
                />
            </div>

            {move || match session.with(|s| s.breakdown_view()) {
                Some(rows) => rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="purity-card">
                                <div>
                                    <span class="purity-point-label">"Purity"</span>
                                    <span class="purity-point-value">
                                        {row.purity.clone()}
                                        {if row.is_manual_extra { " ✎" } else { "" }}
                                    </span>
                                </div>
                                <div>
                                    <span class="purity-point-label">"Pure Wt"</span>
                                    <span class="purity-point-value">{row.pure_weight.clone()}</span>
                                </div>
                                <div>
                                    <span class="purity-point-label">"Profit %"</span>
                                    <span class=format!("purity-point-value {}", row.tone.css_class())>
                                        {row.profit_percent.clone()}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view(),
                None => view! {
                    <div class="purity-placeholder">"Enter all item details to see analysis"</div>
                }
                .into_view(),
            }}
        </div>
    }
}
