use crate::{
    error::{Error, Result},
    resume::Resume,
};
use tera::{Context, Tera};

/// The four résumé themes.
///
/// Parsed from the résumé's `theme` string only when a render is attempted,
/// so an invalid theme sits harmlessly in the model until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Header, optional photo, summary, experience, skills
    Premium,
    /// Condensed header, summary, experience; never renders a photo
    Minimal,
    /// Stylized header, summary, projects
    Creative,
    /// Colored sidebar (photo, contact, skills, languages, hobbies) plus main column
    Sidebar,
}

impl Theme {
    /// Resolves a theme name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTheme`] carrying the offending value.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "premium" => Ok(Self::Premium),
            "minimal" => Ok(Self::Minimal),
            "creative" => Ok(Self::Creative),
            "sidebar" => Ok(Self::Sidebar),
            other => Err(Error::unknown_theme(other)),
        }
    }

    /// Returns the registered template name for this theme.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Premium => "premium.html",
            Self::Minimal => "minimal.html",
            Self::Creative => "creative.html",
            Self::Sidebar => "sidebar.html",
        }
    }
}

/// Default sidebar accent, the "teal" entry of the color table.
const DEFAULT_SIDEBAR_COLOR: &str = "#004d4d";

/// Resolves a sidebar color name to its hex value.
///
/// Unrecognized names fall back to the teal color rather than failing; the
/// value is user-editable JSON and a typo should not break rendering.
#[must_use]
pub fn sidebar_color_hex(name: &str) -> &'static str {
    match name {
        "green" => "#2e7d32",
        "teal" => "#004d4d",
        "mono" => "#222",
        _ => DEFAULT_SIDEBAR_COLOR,
    }
}

/// Renders résumés into complete HTML documents.
///
/// Each theme is a Tera template embedded at compile time and registered
/// under an `.html` name so substituted text is HTML-escaped automatically.
/// The selected fragment is wrapped in a fixed UTF-8 document shell.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Creates a renderer with all built-in theme templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        for (name, source) in [
            ("premium.html", include_str!("../templates/premium.html")),
            ("minimal.html", include_str!("../templates/minimal.html")),
            ("creative.html", include_str!("../templates/creative.html")),
            ("sidebar.html", include_str!("../templates/sidebar.html")),
            ("wrapper.html", include_str!("../templates/wrapper.html")),
        ] {
            tera.add_raw_template(name, source)
                .map_err(|e| Error::template(name, e))?;
        }

        Ok(Self { tera })
    }

    /// Renders the résumé with its selected theme into a full HTML document.
    ///
    /// Empty optional fields omit their visual block entirely. The photo, when
    /// present and supported by the theme, is embedded as a base64 data URI
    /// with a fixed JPEG MIME type regardless of the actual image format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTheme`] for an unrecognized theme (before any
    /// output is produced), or a template error if the résumé's section data
    /// does not have the shape the theme iterates over.
    pub fn render(&self, resume: &Resume) -> Result<String> {
        let theme = Theme::from_name(&resume.theme)?;

        let mut context = Context::new();
        context.insert("resume", resume);
        if theme == Theme::Sidebar {
            context.insert("sidebar_color", sidebar_color_hex(&resume.sidebar_color));
        }

        let fragment = self
            .tera
            .render(theme.template_name(), &context)
            .map_err(|e| Error::template(theme.template_name(), e))?;

        self.wrap(&fragment, "")
    }

    /// Embeds a rendered fragment into the outer document shell.
    ///
    /// `extra_css` is an optional per-theme style block; currently always
    /// empty but part of the shell contract.
    fn wrap(&self, content: &str, extra_css: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("content", content);
        context.insert("extra_css", extra_css);

        self.tera
            .render("wrapper.html", &context)
            .map_err(|e| Error::template("wrapper.html", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_resume(theme: &str) -> Resume {
        let mut resume = Resume::new();
        resume.merge(
            json!({
                "name": "Ada Lovelace",
                "title": "Software Engineer",
                "summary": "Pioneer of computing.",
                "experience": [
                    {
                        "role": "Analyst",
                        "company": "Analytical Engines Ltd",
                        "period": "1840-1850",
                        "bullets": ["Wrote the first program"]
                    }
                ],
                "projects": [
                    {"name": "Notes", "period": "1843", "description": "Annotated translation"}
                ],
                "skills": ["Mathematics"],
                "languages": ["English"],
                "hobbies": ["Music"],
                "contact": {"phone": "+44 1", "email": "ada@example.org", "location": "London"},
                "theme": theme
            })
            .as_object()
            .unwrap(),
        );
        resume
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("premium").unwrap(), Theme::Premium);
        assert_eq!(Theme::from_name("sidebar").unwrap(), Theme::Sidebar);

        let err = Theme::from_name("bogus").unwrap_err();
        assert!(err.is_unknown_theme());
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_unknown_theme_produces_no_output() {
        let renderer = Renderer::new().unwrap();
        let resume = sample_resume("bogus");

        let result = renderer.render(&resume);
        assert!(result.unwrap_err().is_unknown_theme());
    }

    #[test]
    fn test_render_premium() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render(&sample_resume("premium")).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("charset=\"UTF-8\""));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Wrote the first program"));
        assert!(html.contains("Mathematics"));
    }

    #[test]
    fn test_premium_photo_block_is_conditional() {
        let renderer = Renderer::new().unwrap();

        let mut resume = sample_resume("premium");
        assert!(!renderer.render(&resume).unwrap().contains("<img"));

        resume.set_photo(&[0xff, 0xd8, 0xff]);
        let html = renderer.render(&resume).unwrap();
        assert!(html.contains("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_minimal_never_renders_photo() {
        let renderer = Renderer::new().unwrap();
        let mut resume = sample_resume("minimal");
        resume.set_photo(&[0xff, 0xd8, 0xff]);

        let html = renderer.render(&resume).unwrap();
        assert!(!html.contains("<img"));
        assert!(html.contains("Ada Lovelace"));
        assert!(!html.contains("Skills"));
    }

    #[test]
    fn test_creative_renders_projects_not_experience() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render(&sample_resume("creative")).unwrap();

        assert!(html.contains("Annotated translation"));
        assert!(!html.contains("Analytical Engines Ltd"));
    }

    #[test]
    fn test_sidebar_color_table() {
        assert_eq!(sidebar_color_hex("green"), "#2e7d32");
        assert_eq!(sidebar_color_hex("teal"), "#004d4d");
        assert_eq!(sidebar_color_hex("mono"), "#222");
        assert_eq!(sidebar_color_hex("purple"), "#004d4d");
    }

    #[test]
    fn test_sidebar_unknown_color_falls_back_to_teal() {
        let renderer = Renderer::new().unwrap();
        let mut resume = sample_resume("sidebar");
        resume.sidebar_color = "purple".to_string();

        let html = renderer.render(&resume).unwrap();
        assert!(html.contains("background:#004d4d"));
        assert!(html.contains("ada@example.org"));
    }

    #[test]
    fn test_sidebar_omits_absent_contact_lines() {
        let renderer = Renderer::new().unwrap();
        let mut resume = sample_resume("sidebar");
        resume.contact.phone = None;
        resume.contact.location = None;

        let html = renderer.render(&resume).unwrap();
        assert!(html.contains("ada@example.org"));
        assert!(!html.contains("+44 1"));
        assert!(!html.contains("London"));
    }

    #[test]
    fn test_empty_sections_omit_their_blocks() {
        let renderer = Renderer::new().unwrap();
        let mut resume = Resume::new();
        resume.name = "Ada".to_string();

        let html = renderer.render(&resume).unwrap();
        assert!(!html.contains("Summary"));
        assert!(!html.contains("Experience"));
        assert!(!html.contains("Skills"));
    }

    #[test]
    fn test_substituted_text_is_html_escaped() {
        let renderer = Renderer::new().unwrap();
        for theme in ["premium", "minimal", "creative", "sidebar"] {
            let mut resume = sample_resume(theme);
            resume.name = "<script>alert(1)</script>".to_string();

            let html = renderer.render(&resume).unwrap();
            assert!(!html.contains("<script>"), "{theme} must escape markup");
            assert!(html.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_malformed_section_fails_at_render_time() {
        let renderer = Renderer::new().unwrap();
        let mut resume = sample_resume("premium");
        resume.experience = json!("raw AI text");

        let err = renderer.render(&resume).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
    }
}
