use zenai_ui_graphics::{Color, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// A service offering: a landing-page panel plus its detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub title: &'static str,
    /// Short line shown on the landing panel.
    pub tagline: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: Color,
    pub hover_color: Color,
    pub features: &'static [&'static str],
    pub process: &'static [ProcessStep],
    pub pricing: &'static str,
    pub team_images: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// Client design work, shown in the portfolio grid.
    Design,
    /// Websites and apps, shown with their tech stack.
    WebApp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub kind: ProjectKind,
    pub title: &'static str,
    pub description: &'static str,
    pub client: &'static str,
    pub year: u16,
    pub category: &'static str,
    pub details: &'static str,
    pub tech: Option<&'static str>,
    pub images: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u8,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

impl Testimonial {
    /// Letter shown in the avatar circle.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// "CEO at TechStart Inc."
    pub fn byline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

/// Short looping video in the work showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reel {
    pub id: u8,
    pub src: &'static str,
}

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/1200/800";
const TEAM_IMAGE: &str = "/images/team/Gemini_Generated_Image_m5f4vam5f4vam5f4.png";
const AVATAR: &str = "/api/placeholder/100/100";

pub(crate) fn marketing() -> Service {
    Service {
        title: "MARKETING",
        tagline: "Strategic campaigns that drive results",
        description: "Strategic campaigns that drive results and build lasting brand connections.",
        icon: "📈",
        color: Palette::MARKETING,
        hover_color: Palette::MARKETING_HOVER,
        features: &[
            "Brand Strategy & Positioning",
            "Content Marketing",
            "Social Media Management",
            "Email Campaigns",
            "SEO & SEM",
            "Analytics & Reporting",
        ],
        process: &[
            ProcessStep {
                step: 1,
                title: "Discovery",
                description: "We dive deep into your brand, audience, and goals to understand what makes you unique.",
            },
            ProcessStep {
                step: 2,
                title: "Strategy",
                description: "We develop a comprehensive marketing strategy tailored to your business objectives.",
            },
            ProcessStep {
                step: 3,
                title: "Execution",
                description: "We bring the strategy to life with creative campaigns across multiple channels.",
            },
            ProcessStep {
                step: 4,
                title: "Optimization",
                description: "We continuously analyze and optimize campaigns for maximum ROI.",
            },
        ],
        pricing: "Starting at $5,000/month",
        team_images: &[TEAM_IMAGE, TEAM_IMAGE],
    }
}

pub(crate) fn ads() -> Service {
    Service {
        title: "ADS",
        tagline: "Creative ads that convert",
        description: "Creative ads that convert and maximize your advertising ROI.",
        icon: "🎯",
        color: Palette::ADS,
        hover_color: Palette::ADS_HOVER,
        features: &[
            "Creative Development",
            "Campaign Strategy",
            "Multi-Platform Ads",
            "A/B Testing",
            "Performance Optimization",
            "Conversion Tracking",
        ],
        process: &[
            ProcessStep {
                step: 1,
                title: "Research",
                description: "We analyze your target audience and competitive landscape.",
            },
            ProcessStep {
                step: 2,
                title: "Creative Concept",
                description: "We develop compelling ad concepts that resonate with your audience.",
            },
            ProcessStep {
                step: 3,
                title: "Production",
                description: "We create high-quality ad assets across all formats and platforms.",
            },
            ProcessStep {
                step: 4,
                title: "Launch & Scale",
                description: "We launch campaigns and scale what works for maximum impact.",
            },
        ],
        pricing: "Starting at $3,000/month",
        team_images: &[TEAM_IMAGE, TEAM_IMAGE],
    }
}

pub(crate) fn web_development() -> Service {
    Service {
        title: "WEB DEVELOPMENT",
        tagline: "Cutting-edge web experiences",
        description: "Cutting-edge web experiences that engage users and drive conversions.",
        icon: "⚡",
        color: Palette::WEB,
        hover_color: Palette::WEB_HOVER,
        features: &[
            "Custom Web Development",
            "E-Commerce Solutions",
            "Web Applications",
            "Mobile Responsive Design",
            "Performance Optimization",
            "Ongoing Maintenance",
        ],
        process: &[
            ProcessStep {
                step: 1,
                title: "Planning",
                description: "We define requirements, create wireframes, and plan the technical architecture.",
            },
            ProcessStep {
                step: 2,
                title: "Design",
                description: "We design beautiful, user-friendly interfaces that align with your brand.",
            },
            ProcessStep {
                step: 3,
                title: "Development",
                description: "We build robust, scalable solutions using the latest technologies.",
            },
            ProcessStep {
                step: 4,
                title: "Launch & Support",
                description: "We deploy your site and provide ongoing support and updates.",
            },
        ],
        pricing: "Starting at $10,000/project",
        team_images: &[TEAM_IMAGE, TEAM_IMAGE],
    }
}

pub(crate) fn projects() -> [(&'static str, Project); 6] {
    [
        (
            "client-1",
            Project {
                kind: ProjectKind::Design,
                title: "Brand Identity Design",
                description: "Complete rebrand for tech startup",
                client: "TechCorp",
                year: 2024,
                category: "Branding",
                details: "We created a comprehensive brand identity system for TechCorp, including logo design, color palette, typography, and brand guidelines. The new identity reflects their innovative approach while maintaining professionalism.",
                tech: None,
                images: &[PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE],
            },
        ),
        (
            "client-2",
            Project {
                kind: ProjectKind::Design,
                title: "UI/UX Design System",
                description: "Modern design system for SaaS platform",
                client: "SaaSPro",
                year: 2024,
                category: "UI/UX",
                details: "Developed a scalable design system that improved consistency across all products. The system includes component library, design tokens, and comprehensive documentation.",
                tech: None,
                images: &[PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE],
            },
        ),
        (
            "client-3",
            Project {
                kind: ProjectKind::Design,
                title: "Creative Campaign",
                description: "Visual identity and marketing materials",
                client: "CreativeStudio",
                year: 2024,
                category: "Marketing",
                details: "Designed and executed a full creative campaign including social media assets, print materials, and digital advertisements that increased brand awareness by 250%.",
                tech: None,
                images: &[PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE],
            },
        ),
        (
            "web-1",
            Project {
                kind: ProjectKind::WebApp,
                title: "E-Commerce Platform",
                description: "Modern shopping experience",
                client: "ShopTech",
                year: 2024,
                category: "Web Development",
                details: "Built a high-performance e-commerce platform using Next.js and Shopify. Features include advanced filtering, real-time inventory, and seamless checkout experience.",
                tech: Some("Next.js, Shopify"),
                images: &[PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE],
            },
        ),
        (
            "web-2",
            Project {
                kind: ProjectKind::WebApp,
                title: "SaaS Dashboard",
                description: "Analytics and insights platform",
                client: "DataViz",
                year: 2024,
                category: "Web Development",
                details: "Created an intuitive dashboard for data visualization and analytics. The platform handles millions of data points with real-time updates and interactive charts.",
                tech: Some("React, TypeScript"),
                images: &[PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE],
            },
        ),
        (
            "web-3",
            Project {
                kind: ProjectKind::WebApp,
                title: "Mobile App",
                description: "iOS & Android native app",
                client: "MobileFirst",
                year: 2024,
                category: "Mobile Development",
                details: "Developed a cross-platform mobile application using React Native. The app features offline capabilities, push notifications, and seamless user experience.",
                tech: Some("React Native"),
                images: &[PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE],
            },
        ),
    ]
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson",
            role: "CEO",
            company: "TechStart Inc.",
            quote: "ZenAI transformed our brand identity completely. Their creative approach combined with technical excellence delivered beyond our expectations.",
            avatar: AVATAR,
        },
        Testimonial {
            id: 2,
            name: "Michael Chen",
            role: "Founder",
            company: "SaaSPro",
            quote: "The web platform they built for us is not just beautiful, it converts. Our user engagement increased by 300% after launch.",
            avatar: AVATAR,
        },
        Testimonial {
            id: 3,
            name: "Emily Rodriguez",
            role: "Marketing Director",
            company: "CreativeStudio",
            quote: "Their marketing campaigns are pure genius. We saw ROI within the first month. ZenAI understands both creativity and data.",
            avatar: AVATAR,
        },
        Testimonial {
            id: 4,
            name: "David Park",
            role: "Product Manager",
            company: "InnovateLabs",
            quote: "Working with ZenAI was seamless. They delivered a world-class design system that our team loves to use every day.",
            avatar: AVATAR,
        },
        Testimonial {
            id: 5,
            name: "Lisa Thompson",
            role: "CMO",
            company: "BrandVault",
            quote: "The ad campaigns they created broke all our previous records. Creative, strategic, and results-driven - everything we needed.",
            avatar: AVATAR,
        },
    ]
}

pub(crate) fn reels() -> Vec<Reel> {
    vec![
        Reel { id: 1, src: "/videos/dog.mp4" },
        Reel { id: 2, src: "/videos/reel2.mp4" },
        Reel { id: 3, src: "/videos/reel3.mp4" },
        Reel { id: 4, src: "/videos/reel4.mp4" },
        Reel { id: 5, src: "/videos/reel5.mp4" },
    ]
}
