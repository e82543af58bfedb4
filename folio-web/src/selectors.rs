//! Element ids, selectors, attributes and class names the page markup uses.

pub const NAVBAR: &str = "navbar";
pub const NAVBAR_TOGGLE: &str = "navbarToggle";
pub const NAVBAR_MENU: &str = "navbarMenu";
pub const NAV_LINKS: &str = ".navbar-link";
pub const SECTIONS: &str = "section[id]";
pub const SCROLL_INDICATOR: &str = ".scroll-indicator";
pub const BACK_TO_TOP: &str = "backToTop";
pub const LOADER: &str = ".loader";

pub const SLIDES: &str = ".testimonial-slide";
pub const PREV_SLIDE: &str = "prevTestimonial";
pub const NEXT_SLIDE: &str = "nextTestimonial";
pub const DOTS: &str = "testimonialDots";
pub const CAROUSEL: &str = ".testimonials-carousel";

pub const FILTER_BUTTONS: &str = ".filter-btn";
pub const PROJECT_CARDS: &str = ".project-card";
pub const MODAL: &str = "projectModal";
pub const MODAL_BODY: &str = "modalBody";
pub const MODAL_CLOSE: &str = "modalClose";

pub const CONTACT_FORM: &str = "contactForm";
pub const FORM_GROUPS: &str = ".form-group";
pub const FORM_CONTROL: &str = ".form-input, .form-textarea";

pub const SKILLS: &str = "skills";
pub const SKILL_BARS: &str = ".skill-progress";
pub const REVEAL_TARGETS: &str = ".card, .project-card, .blog-card, .timeline-item, .skill-category, .contact-item";

/// `<script type="application/json">` holding configuration overrides.
pub const CONFIG_SCRIPT: &str = "folio-config";

pub mod attr {
    pub const HREF: &str = "href";
    pub const FILTER: &str = "data-filter";
    pub const CATEGORY: &str = "data-category";
    pub const PROJECT: &str = "data-project";
    /// Optional boolean on the carousel; overrides configured autoplay.
    pub const AUTOPLAY: &str = "data-autoplay";
    pub const TYPE: &str = "type";
    /// Written onto fade-in targets so observer entries map back to a key.
    pub const REVEAL_INDEX: &str = "data-reveal-index";
}

pub mod class {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const VISIBLE: &str = "visible";
    pub const HIDDEN: &str = "hidden";
    pub const FADE_IN: &str = "fade-in";
    pub const ANIMATE: &str = "animate";
    pub const ERROR: &str = "error";
    pub const DOT: &str = "carousel-dot";
}
