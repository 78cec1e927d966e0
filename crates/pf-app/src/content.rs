//! Page content shown by the app

use pf_core::ProjectCard;

/// A recommendation shown in the testimonial carousel
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

impl Testimonial {
    fn new(quote: &str, author: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
        }
    }
}

/// Everything the page displays
#[derive(Debug, Clone)]
pub struct PortfolioContent {
    pub name: String,
    pub about: String,
    pub projects: Vec<ProjectCard>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<String>,
}

impl PortfolioContent {
    /// Sample content
    pub fn demo() -> Self {
        let images = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

        Self {
            name: "Alex Rivera".to_string(),
            about: "I build fast, reliable software: compilers, storage engines and the \
                    occasional web page. Currently focused on developer tooling."
                .to_string(),
            projects: vec![
                ProjectCard::new("Toy Compiler", "systems")
                    .with_images(images(&["Parser", "IR", "Codegen"])),
                ProjectCard::new("Photo Journal", "web")
                    .with_images(images(&["Timeline", "Editor"])),
                ProjectCard::new("Slab Allocator", "systems")
                    .with_images(images(&["Benchmarks"])),
                ProjectCard::new("Budget Dashboard", "web")
                    .with_images(images(&["Overview", "Reports", "Settings", "Export"])),
                ProjectCard::new("Sentiment Model", "data")
                    .with_images(images(&["Training", "Confusion matrix"])),
            ],
            testimonials: vec![
                Testimonial::new("Shipped the rewrite ahead of schedule.", "Jordan, Tech Lead"),
                Testimonial::new("The best code reviewer on the team.", "Sam, Engineer"),
                Testimonial::new("Turned a flaky pipeline into a boring one.", "Priya, SRE"),
                Testimonial::new("Explains hard problems clearly.", "Chris, PM"),
                Testimonial::new("Made our build three times faster.", "Morgan, CTO"),
            ],
            gallery: images(&["Conference talk", "Hackathon", "Workshop", "Meetup", "Demo day", "Team offsite"]),
        }
    }
}
