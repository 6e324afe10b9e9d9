//! Named parts of the host document.
//!
//! Components never spell out selectors; they ask the [`View`](crate::View)
//! for a role. The browser view resolves a role through [`Role::selector`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Navbar,
    NavToggle,
    NavMenu,
    NavLink,
    /// Any anchor whose `href` starts with `#`.
    HashLink,
    ThemeToggle,
    /// Font Awesome `<i>` icon inside a control.
    Icon,
    LoadingScreen,
    BackToTop,
    ScrollProgress,
    HeroShape,
    FloatingCard,
    RevealTarget,
    Section,
    Hero,
    HeroTitle,
    StatCounter,
    FilterButton,
    PortfolioItem,
    Testimonial,
    TestimonialDot,
    TestimonialSlider,
    ContactForm,
    FormControl,
    RequiredField,
    SubmitButton,
    PhoneInput,
    ServiceModal,
    ModalTitle,
    ModalBody,
    Focusable,
    UnlabelledButton,
    SocialLink,
    LazyImage,
    /// Elements whose clicks feed analytics.
    TrackedControl,
}

impl Role {
    pub fn selector(self) -> &'static str {
        match self {
            Role::Navbar => "#navbar",
            Role::NavToggle => "#nav-toggle",
            Role::NavMenu => "#nav-menu",
            Role::NavLink => ".nav-link",
            Role::HashLink => r##"a[href^="#"]"##,
            Role::ThemeToggle => "#theme-toggle",
            Role::Icon => "i",
            Role::LoadingScreen => "#loading-screen",
            Role::BackToTop => "#back-to-top",
            Role::ScrollProgress => ".scroll-progress",
            Role::HeroShape => ".hero-bg-shapes .shape",
            Role::FloatingCard => ".floating-card",
            Role::RevealTarget => "[data-aos]",
            Role::Section => "section",
            Role::Hero => ".hero",
            Role::HeroTitle => ".hero-title",
            Role::StatCounter => ".stat-number[data-target]",
            Role::FilterButton => ".filter-btn",
            Role::PortfolioItem => ".portfolio-item",
            Role::Testimonial => ".testimonial-item",
            Role::TestimonialDot => ".nav-dot",
            Role::TestimonialSlider => ".testimonials-slider",
            Role::ContactForm => "#contact-form",
            Role::FormControl => "input, select, textarea",
            Role::RequiredField => "[required]",
            Role::SubmitButton => r#"button[type="submit"]"#,
            Role::PhoneInput => "#phone",
            Role::ServiceModal => "#service-modal",
            Role::ModalTitle => "#modal-title",
            Role::ModalBody => "#modal-body",
            Role::Focusable => {
                r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#
            }
            Role::UnlabelledButton => "button:not([aria-label])",
            Role::SocialLink => ".social-link",
            Role::LazyImage => r#"img[loading="lazy"]"#,
            Role::TrackedControl => "button, a",
        }
    }
}
