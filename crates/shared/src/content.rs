//! Static copy rendered by the page shell.

use crate::domain::SectionId;

pub const OWNER_NAME: &str = "Gaurav Nidhi";
pub const OWNER_TAGLINE: &str = "Front-end developer • React • Next.js";
pub const GITHUB_URL: &str = "https://github.com/gauravnidhi001";
pub const GITHUB_HANDLE: &str = "@gauravnidhi001";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/gaurav-nidhi-013b29381?utm_source=share_via&utm_content=profile&utm_medium=member_android";
pub const CONTACT_EMAIL: &str = "gaurav.nidhi.2006@gmail.com";
pub const CONTACT_PHONE: &str = "+91 93865 83011";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryCard {
    pub title: &'static str,
    pub copy: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub status: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookCard {
    pub title: &'static str,
    pub author: &'static str,
    pub quote: &'static str,
    pub review: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Home",
        target: SectionId::Home,
    },
    NavItem {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavItem {
        label: "Favoured Literature",
        target: SectionId::FavouredLiterature,
    },
    NavItem {
        label: "Contact",
        target: SectionId::Contact,
    },
];

pub const HERO_TITLE: &str = "Gaurav Nidhi — Veni. Vidi. Vici.";
pub const HERO_LEDE: &str = "I'm a Frontend Developer, Full-Stack in Progress. I build clean, responsive websites and I'm currently mastering backend to become a complete full-stack developer.";
pub const HERO_META: [&str; 2] = [
    "Always trying to learn something new",
    "React • Next.js • JavaScript • Always learning",
];

pub const STORIES_HEADING: &str = "Minimalism in practice.";
pub const STORIES: [StoryCard; 3] = [
    StoryCard {
        title: "B.Tech in CS / IT",
        copy: "Studying at Ajeenkya DY Patil University with a focus on crafting interfaces and understanding full-stack systems.",
    },
    StoryCard {
        title: "Front-end developer",
        copy: "Comfortable building responsive layouts with HTML, CSS, and vanilla JavaScript while experimenting with motion.",
    },
    StoryCard {
        title: "Road to full stack",
        copy: "Backend practice starts soon; every project is documented so growth from beginner to full-stack dev stays visible.",
    },
];

pub const EXAMPLES: [&str; 3] = [
    "Architect studios that showcase blueprints with ample negative space.",
    "Fashion houses presenting look-books like museum placards.",
    "Music collectives with editorial spreads, monochrome photography, and slow-scroll reveals.",
];

pub const PROJECTS_HEADING: &str = "Case studies under construction.";
pub const PROJECTS_NOTE: &str =
    "Build logs are active, but full visual breakdowns will appear here soon.";
pub const PROJECTS: [ProjectCard; 2] = [
    ProjectCard {
        title: "Project slots reserved",
        status: "Coming soon",
        summary: "Live case studies will be published here as soon as current builds reach polish.",
    },
    ProjectCard {
        title: "Repository pipeline",
        status: "In progress",
        summary: "Tracking experiments on GitHub (@gauravnidhi001) before turning them into showcase pieces.",
    },
];

pub const LITERATURE_HEADING: &str = "Books, quotes, and short reviews.";
pub const LITERATURE_NOTE: &str = "A small library of works that shapes my thinking and craft.";
pub const FAVOURED_LITERATURE: [BookCard; 3] = [
    BookCard {
        title: "The Little Prince",
        author: "Antoine de Saint-Exupéry",
        quote: "On ne voit bien qu'avec le cœur. L'essentiel est invisible pour les yeux.",
        review: "A concise, poetic meditation on childhood, imagination, and the small truths that anchor us. Its simplicity hides deep emotional clarity — a book I return to when I want perspective.",
    },
    BookCard {
        title: "Thinking, Fast and Slow",
        author: "Daniel Kahneman",
        quote: "Nothing in life is as important as you think it is, while you are thinking about it.",
        review: "An essential read on cognition and bias. It changed how I design interactions by making me question assumptions about user rationality and attention.",
    },
    BookCard {
        title: "On Minimalism",
        author: "Joshua Fields Millburn & Ryan Nicodemus",
        quote: "Minimalism is the intentional promotion of the things we most value and the removal of anything that distracts us from it.",
        review: "Practical and humane, this collection of essays helped shape my approach to design: remove noise, emphasize intent, and respect negative space.",
    },
];

pub const CONTACT_EYEBROW: &str = "Director & theater company";
pub const CONTACT_HEADING: &str = "Available for future scenes.";

pub fn section_title(section: SectionId) -> &'static str {
    match section {
        SectionId::Home => "Home",
        SectionId::Stories => "Stories",
        SectionId::Projects => "Projects",
        SectionId::FavouredLiterature => "Favoured Literature",
        SectionId::Contact => "Contact",
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("Minimal stage © {year}")
}
