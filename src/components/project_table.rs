//! Project table and stat cards for the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::{ProjectRow, ProjectStats};

/// The three header counters.
#[component]
pub fn ProjectStatsCards(stats: Signal<ProjectStats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-card__label">"Total Projects"</span>
                <span id="total-projects" class="stat-card__value">{move || stats.get().total}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Active"</span>
                <span id="active-projects" class="stat-card__value">{move || stats.get().active}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Inactive"</span>
                <span id="inactive-projects" class="stat-card__value">
                    {move || stats.get().inactive}
                </span>
            </div>
        </div>
    }
}

/// One row per project, in the order given. `on_delete` receives the id.
#[component]
pub fn ProjectTable(rows: Signal<Vec<ProjectRow>>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <table class="projects-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Slug"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="projects-table">
                <For each=move || rows.get() key=ProjectRow::render_key let:row>
                    <tr>
                        <td>{row.name}</td>
                        <td>{row.slug}</td>
                        <td>
                            <span class="badge">{row.status}</span>
                        </td>
                        <td>
                            <a href=row.edit_href class="btn btn-secondary">"Edit"</a>
                            <button
                                class="btn btn-danger"
                                on:click=move |_| on_delete.run(row.id)
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                </For>
            </tbody>
        </table>
    }
}
