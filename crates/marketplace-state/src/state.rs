use std::sync::Arc;

use chrono::{Local, NaiveDate};
use marketplace_catalog::{
    Catalog, CatalogError, MemberRole, Plugin, UpdateStatus, Vocabularies,
};
use marketplace_filter::{filter_plugins, filter_scoped, FilterCriteria, PlatformScope};

use crate::config::{ConfigError, MarketplaceConfig};
use crate::install::{effectively_installed, InstallAffordance, InstallationSet};
use crate::likes::LikeSet;
use crate::nav::{visible_pages, Page};
use crate::project::{sample_projects, search_projects, Project, ProjectError, ProjectInstall};
use crate::session::Session;
use crate::submission::{
    sample_submissions, PluginSubmission, ReviewStatus, SubmissionError, SubmissionSummary,
    SubmittedPlugin,
};
use crate::transition::Transition;

/// Everything a marketplace view reads or mutates.
#[derive(Debug, Clone)]
pub struct MarketplaceState {
    catalog: Arc<Catalog>,
    session: Session,
    installs: InstallationSet,
    likes: LikeSet,
    projects: Vec<Project>,
    submissions: Vec<SubmittedPlugin>,
    featured_limit: usize,
}

impl MarketplaceState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: Session::default(),
            installs: InstallationSet::new(),
            likes: LikeSet::default(),
            projects: sample_projects(),
            submissions: sample_submissions(),
            featured_limit: MarketplaceConfig::default().featured_limit,
        }
    }

    pub fn from_config(config: &MarketplaceConfig) -> Result<Self, ConfigError> {
        let mut state = Self::new(config.catalog()?);
        state.featured_limit = config.featured_limit;
        Ok(state)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn vocabularies(&self) -> Vocabularies {
        self.catalog.vocabularies()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn installations(&self) -> &InstallationSet {
        &self.installs
    }

    pub fn detail(&self, id: &str) -> Result<&Plugin, CatalogError> {
        self.catalog.get(id)
    }

    pub fn featured(&self) -> Vec<&Plugin> {
        self.catalog.featured(self.featured_limit)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Plugin> {
        filter_plugins(self.catalog.plugins(), criteria)
    }

    pub fn filter_platform(&self, scope: &PlatformScope) -> Vec<&Plugin> {
        filter_scoped(self.catalog.plugins(), scope)
    }

    pub fn is_installed(&self, id: &str) -> Result<bool, CatalogError> {
        let plugin = self.catalog.get(id)?;
        Ok(effectively_installed(plugin, &self.installs))
    }

    pub fn affordance(&self, id: &str) -> Result<InstallAffordance, CatalogError> {
        let plugin = self.catalog.get(id)?;
        Ok(InstallAffordance::resolve(plugin, &self.installs, &self.session))
    }

    /// Seeded and session installs, each once, in catalog order.
    pub fn installed_plugins(&self) -> Vec<&Plugin> {
        self.catalog
            .plugins()
            .iter()
            .filter(|plugin| effectively_installed(plugin, &self.installs))
            .collect()
    }

    pub fn installed_with_status(&self, today: NaiveDate) -> Vec<(&Plugin, UpdateStatus)> {
        self.installed_plugins()
            .into_iter()
            .map(|plugin| (plugin, plugin.update_status(today)))
            .collect()
    }

    pub fn visible_pages(&self) -> Vec<Page> {
        visible_pages(&self.session)
    }

    pub fn login(&mut self, username: &str, role: Option<MemberRole>) -> Transition {
        let transition = self.session.login(username, role);
        match transition {
            Transition::Applied => {
                tracing::info!(username, role = %self.session.role(), "logged in");
            }
            Transition::Ignored(reason) => {
                tracing::debug!(?reason, "login ignored");
            }
        }
        transition
    }

    pub fn logout(&mut self) -> Transition {
        let username = self.session.username().map(str::to_owned);
        let transition = self.session.logout();
        tracing::info!(username = username.as_deref().unwrap_or("-"), "logged out");
        transition
    }

    /// Installed plugins survive role switches.
    pub fn switch_role(&mut self, role: MemberRole) -> Transition {
        let transition = self.session.switch_role(role);
        tracing::debug!(?role, ?transition, "switch role");
        transition
    }

    /// Logs the configured demo user in, or logs out when already logged in.
    pub fn quick_login(&mut self, config: &MarketplaceConfig) -> Transition {
        if self.session.is_logged_in() {
            self.logout()
        } else {
            self.login(&config.quick_login_username, Some(config.default_role))
        }
    }

    pub fn install(&mut self, id: &str) -> Result<Transition, CatalogError> {
        self.catalog.get(id)?;
        let transition = self.installs.install(&self.session, id);
        if transition.is_applied() {
            tracing::info!(plugin = id, "installed");
        } else {
            tracing::debug!(plugin = id, ?transition, "install ignored");
        }
        Ok(transition)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn search_projects(&self, term: &str) -> Vec<&Project> {
        search_projects(&self.projects, term)
    }

    /// Installs a plugin from the project picker. Gated on login like [`Self::install`].
    pub fn install_into(
        &mut self,
        plugin_id: &str,
        project_id: &str,
    ) -> Result<ProjectInstall, ProjectError> {
        let plugin_name = self.catalog.get(plugin_id)?.name.clone();
        let project = self
            .projects
            .iter()
            .find(|project| project.id == project_id)
            .cloned()
            .ok_or_else(|| ProjectError::NotFound(project_id.to_string()))?;
        let transition = self.install(plugin_id)?;
        tracing::debug!(plugin = plugin_id, project = %project.name, "install into project");
        Ok(ProjectInstall {
            plugin_name,
            project,
            transition,
        })
    }

    /// Only removes a session install; a seeded plugin stays installed.
    pub fn uninstall(&mut self, id: &str) -> Transition {
        let transition = self.installs.uninstall(id);
        tracing::debug!(plugin = id, ?transition, "uninstall");
        transition
    }

    pub fn toggle_like(&mut self, id: &str) -> Result<bool, CatalogError> {
        self.catalog.get(id)?;
        Ok(self.likes.toggle(id))
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.contains(id)
    }

    pub fn submissions(&self) -> &[SubmittedPlugin] {
        &self.submissions
    }

    pub fn submission_summary(&self) -> SubmissionSummary {
        SubmissionSummary::of(&self.submissions)
    }

    pub fn submit(&mut self, submission: PluginSubmission) -> Result<&SubmittedPlugin, SubmissionError> {
        self.submit_on(submission, Local::now().date_naive())
    }

    /// Queues a submission for review. Nothing leaves the process.
    pub fn submit_on(
        &mut self,
        submission: PluginSubmission,
        today: NaiveDate,
    ) -> Result<&SubmittedPlugin, SubmissionError> {
        if !self.session.is_logged_in() {
            return Err(SubmissionError::LoginRequired);
        }
        submission.validate()?;
        let (Some(platform), Some(function)) = (submission.platform, submission.function) else {
            return Err(SubmissionError::MissingFields(vec!["platform", "function"]));
        };
        let entry = SubmittedPlugin {
            id: format!("dev-{}", self.submissions.len() + 1),
            name: submission.name,
            platform,
            function,
            version: submission.version,
            status: ReviewStatus::Pending,
            submitted_date: today,
            review_date: None,
            downloads: 0,
            feedback: None,
        };
        tracing::info!(id = %entry.id, name = %entry.name, "plugin submitted for review");
        self.submissions.push(entry);
        Ok(&self.submissions[self.submissions.len() - 1])
    }
}

impl Default for MarketplaceState {
    fn default() -> Self {
        Self::new(Catalog::stock())
    }
}
