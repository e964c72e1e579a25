//! The shipped site configuration.

use std::borrow::Cow;

pub use crate::config::{Hero, Image, NavLink, SiteConfig, Subscribe};

const PORTRAIT: &str = "/michael_canyon.jpg";

const HERO_TEXT: &str = "I'm **Michael Yang**, a game developer at Heavy Iron Studios. \
In this website you'll find some of my favorite projects and things that I'm working on. \
I enjoy exploring a variety of techniques and concepts in game development, and some of the \
more interesting problems and challenges I encounter will be detailed here. Thanks for stopping by!";

pub static SITE_CONFIG: SiteConfig = SiteConfig {
    title: Cow::Borrowed("Michael Yang"),
    subtitle: Some(Cow::Borrowed("Personal Website and Portfolio")),
    description: Cow::Borrowed(""),
    posts_per_page: Some(8),
    projects_per_page: Some(8),
    logo: None,
    image: Some(Image {
        src: Cow::Borrowed(PORTRAIT),
        alt: Some(Cow::Borrowed("Picture of me at the canyon")),
        caption: None,
    }),
    header_nav_links: Some(Cow::Borrowed(&[
        NavLink::new("Home", "/"),
        NavLink::new("Projects", "/projects"),
        NavLink::new("Blog", "/blog"),
        NavLink::new("Tags", "/tags"),
    ])),
    footer_nav_links: Some(Cow::Borrowed(&[
        NavLink::new("About", "/about"),
        NavLink::new("Contact", "/contact"),
    ])),
    social_links: Some(Cow::Borrowed(&[NavLink::new(
        "LinkedIn",
        "https://www.linkedin.com/in/michaelryang/",
    )])),
    hero: Some(Hero {
        title: Some(Cow::Borrowed("Welcome to my portfolio.")),
        text: Some(Cow::Borrowed(HERO_TEXT)),
        image: Some(Image {
            src: Cow::Borrowed(PORTRAIT),
            alt: Some(Cow::Borrowed("Picture of me at the Grand Canyon")),
            caption: None,
        }),
        actions: Some(Cow::Borrowed(&[NavLink::new("Get in Touch", "/contact")])),
    }),
    subscribe: None,
};
