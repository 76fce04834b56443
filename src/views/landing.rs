use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::state::SharedState;

use super::content::{self, ContactInfo, Project, Skill, Stats};

#[derive(Template)]
#[template(path = "index.html")]
struct LandingTemplate<'a> {
    owner_name: &'a str,
    projects: &'a [Project],
    skills: &'a [Skill],
    stats: &'a Stats,
    contact: &'a ContactInfo,
}

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let template = LandingTemplate {
        owner_name: &state.config.owner_name,
        projects: content::PROJECTS,
        skills: content::SKILLS,
        stats: &content::STATS,
        contact: &content::CONTACT,
    };

    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Failed to render landing page: {e}")))
}
