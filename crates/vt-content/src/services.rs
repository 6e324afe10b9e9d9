//! Service catalogue shown by the service modal.

use serde::{Deserialize, Serialize};

use crate::strings;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Mobile,
    Marketing,
    Design,
    #[default]
    #[serde(other)]
    Web,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceContent {
    pub title: &'static str,
    pub icon: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub includes: [&'static str; 6],
    pub technologies: [&'static str; 5],
    pub tiers: [PriceTier; 3],
}

const fn tiers(
    basic: (&'static str, &'static str),
    pro: (&'static str, &'static str),
    enterprise: (&'static str, &'static str),
) -> [PriceTier; 3] {
    [
        PriceTier {
            name: "Básico",
            price: basic.0,
            blurb: basic.1,
            featured: false,
        },
        PriceTier {
            name: "Profissional",
            price: pro.0,
            blurb: pro.1,
            featured: true,
        },
        PriceTier {
            name: "Enterprise",
            price: enterprise.0,
            blurb: enterprise.1,
            featured: false,
        },
    ]
}

static WEB: ServiceContent = ServiceContent {
    title: "Desenvolvimento Web",
    icon: "fa-code",
    headline: "Desenvolvimento Web Profissional",
    summary: "Criamos sites e aplicações web modernas, responsivas e otimizadas para performance.",
    includes: [
        "Design responsivo para todos os dispositivos",
        "Otimização para mecanismos de busca (SEO)",
        "Integração com sistemas de pagamento",
        "Painel administrativo personalizado",
        "Hospedagem e domínio por 1 ano",
        "Suporte técnico por 6 meses",
    ],
    technologies: ["React", "Next.js", "Node.js", "MongoDB", "AWS"],
    tiers: tiers(
        ("R$ 2.500", "Site institucional com até 5 páginas"),
        ("R$ 5.000", "Site completo com funcionalidades avançadas"),
        ("R$ 10.000+", "Solução personalizada para grandes empresas"),
    ),
};

static MOBILE: ServiceContent = ServiceContent {
    title: "Aplicativos Mobile",
    icon: "fa-mobile-alt",
    headline: "Aplicativos Mobile Nativos e Híbridos",
    summary: "Desenvolvemos apps para iOS e Android com experiência excepcional do usuário.",
    includes: [
        "App nativo para iOS e Android",
        "Design UI/UX personalizado",
        "Integração com APIs e serviços",
        "Sistema de notificações push",
        "Publicação nas lojas de apps",
        "Suporte e atualizações por 1 ano",
    ],
    technologies: ["React Native", "Flutter", "Firebase", "Swift", "Kotlin"],
    tiers: tiers(
        ("R$ 5.000", "App simples com funcionalidades básicas"),
        ("R$ 12.000", "App completo com recursos avançados"),
        ("R$ 25.000+", "Solução empresarial personalizada"),
    ),
};

static MARKETING: ServiceContent = ServiceContent {
    title: "Marketing Digital",
    icon: "fa-chart-bar",
    headline: "Marketing Digital Estratégico",
    summary: "Estratégias completas para aumentar sua presença online e gerar mais conversões.",
    includes: [
        "Auditoria completa da presença digital",
        "Estratégia de SEO e SEM",
        "Gestão de redes sociais",
        "Criação de conteúdo",
        "Campanhas de Google Ads",
        "Relatórios mensais de performance",
    ],
    technologies: ["Google Analytics", "Google Ads", "Facebook Ads", "SEMrush", "Mailchimp"],
    tiers: tiers(
        ("R$ 1.500/mês", "Gestão básica de redes sociais e SEO"),
        ("R$ 3.500/mês", "Estratégia completa com campanhas pagas"),
        ("R$ 7.000+/mês", "Solução completa para grandes empresas"),
    ),
};

static DESIGN: ServiceContent = ServiceContent {
    title: "UI/UX Design",
    icon: "fa-palette",
    headline: "Design de Interface e Experiência",
    summary: "Criamos interfaces intuitivas e experiências que convertem visitantes em clientes.",
    includes: [
        "Pesquisa de usuário e personas",
        "Wireframes e protótipos",
        "Design system completo",
        "Testes de usabilidade",
        "Guia de estilo e componentes",
        "Handoff para desenvolvimento",
    ],
    technologies: ["Figma", "Adobe XD", "Sketch", "InVision", "Principle"],
    tiers: tiers(
        ("R$ 2.000", "Design de interface para projeto simples"),
        ("R$ 5.000", "UX completo com pesquisa e testes"),
        ("R$ 12.000+", "Design system completo para empresa"),
    ),
};

impl Service {
    pub const ALL: [Service; 4] = [Self::Web, Self::Mobile, Self::Marketing, Self::Design];

    /// Resolve a key from markup (`openServiceModal('mobile')`).
    /// Anything unrecognised opens the web development entry.
    pub fn from_key(key: &str) -> Self {
        match key {
            "web" => Self::Web,
            "mobile" => Self::Mobile,
            "marketing" => Self::Marketing,
            "design" => Self::Design,
            _ => Self::Web,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Marketing => "marketing",
            Self::Design => "design",
        }
    }

    pub fn content(self) -> &'static ServiceContent {
        match self {
            Self::Web => &WEB,
            Self::Mobile => &MOBILE,
            Self::Marketing => &MARKETING,
            Self::Design => &DESIGN,
        }
    }
}

impl ServiceContent {
    /// Modal body markup. The call-to-action closes the modal and jumps to
    /// the contact section through the window-level helpers.
    pub fn render_body(&self) -> String {
        let includes: String = self
            .includes
            .iter()
            .map(|item| format!(r#"<li><i class="fas fa-check"></i> {item}</li>"#))
            .collect();
        let badges: String = self
            .technologies
            .iter()
            .map(|tech| format!(r#"<span class="tech-badge">{tech}</span>"#))
            .collect();
        let pricing: String = self
            .tiers
            .iter()
            .map(|tier| {
                let class = if tier.featured { "price-card featured" } else { "price-card" };
                format!(
                    r#"<div class="{class}"><h5>{}</h5><div class="price">{}</div><p>{}</p></div>"#,
                    tier.name, tier.price, tier.blurb
                )
            })
            .collect();

        format!(
            concat!(
                r#"<div class="service-modal-content">"#,
                r#"<div class="service-hero"><div class="service-icon-large"><i class="fas {icon}"></i></div>"#,
                r#"<h3>{headline}</h3><p>{summary}</p></div>"#,
                r#"<div class="service-details">"#,
                r#"<h4>{included}</h4><ul class="service-includes">{includes}</ul>"#,
                r#"<h4>{tech}</h4><div class="tech-badges">{badges}</div>"#,
                r#"<div class="service-pricing">{pricing}</div>"#,
                r#"<div class="service-cta"><button class="btn btn-primary" onclick="closeServiceModal(); scrollToSection('contact');">{cta}</button></div>"#,
                r#"</div></div>"#,
            ),
            icon = self.icon,
            headline = self.headline,
            summary = self.summary,
            included = strings::INCLUDED_HEADING,
            includes = includes,
            tech = strings::TECH_HEADING,
            badges = badges,
            pricing = pricing,
            cta = strings::REQUEST_QUOTE,
        )
    }
}
