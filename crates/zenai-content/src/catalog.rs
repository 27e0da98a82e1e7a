use crate::entries::{self, Project, ProjectKind, Reel, Service, Testimonial};
use crate::registry::{ContentRegistry, RegistryError};
use crate::route::Route;
use crate::slug::Slug;

/// Everything a page needs to render, resolved from a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page<'a> {
    Landing,
    Service { slug: &'a Slug, service: &'a Service },
    Project { slug: &'a Slug, project: &'a Project },
}

/// All hard-coded site content. Built once, then only read.
#[derive(Debug, Clone)]
pub struct StudioCatalog {
    services: ContentRegistry<Service>,
    projects: ContentRegistry<Project>,
    testimonials: Vec<Testimonial>,
    reels: Vec<Reel>,
}

impl StudioCatalog {
    pub fn studio() -> Result<Self, RegistryError> {
        let services = ContentRegistry::new("marketing", entries::marketing())?
            .with_entry("ads", entries::ads())?
            .with_entry("web-development", entries::web_development())?;

        let [(default_slug, default_project), rest @ ..] = entries::projects();
        let projects = rest.into_iter().try_fold(
            ContentRegistry::new(default_slug, default_project)?,
            |registry, (slug, project)| registry.with_entry(slug, project),
        )?;

        let catalog = Self {
            services,
            projects,
            testimonials: entries::testimonials(),
            reels: entries::reels(),
        };
        log::debug!(
            "catalog: {} services, {} projects, {} testimonials, {} reels",
            catalog.services.len(),
            catalog.projects.len(),
            catalog.testimonials.len(),
            catalog.reels.len()
        );
        Ok(catalog)
    }

    pub fn services(&self) -> &ContentRegistry<Service> {
        &self.services
    }

    pub fn projects(&self) -> &ContentRegistry<Project> {
        &self.projects
    }

    pub fn service(&self, slug: Option<&str>) -> &Service {
        self.services.lookup(slug)
    }

    pub fn project(&self, slug: Option<&str>) -> &Project {
        self.projects.lookup(slug)
    }

    pub fn projects_of_kind(&self, kind: ProjectKind) -> impl Iterator<Item = (&Slug, &Project)> {
        self.projects
            .iter()
            .filter(move |(_, project)| project.kind == kind)
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    /// Not-found routes render the landing page.
    pub fn page(&self, route: &Route) -> Page<'_> {
        match route {
            Route::Landing | Route::NotFound(_) => Page::Landing,
            Route::Service(slug) => {
                let (slug, service) = self.services.resolve(Some(slug));
                Page::Service { slug, service }
            }
            Route::Project(slug) => {
                let (slug, project) = self.projects.resolve(Some(slug));
                Page::Project { slug, project }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
