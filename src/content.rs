// Static marketing content. Everything in this module is plain data; the
// section components map it to markup and never mutate it.

/// Page sections that navigation can target. `id` doubles as the DOM anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Experts,
    CaseStudy,
    Pricing,
    Technology,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Experts => "experts",
            Section::CaseStudy => "case-study",
            Section::Pricing => "pricing",
            Section::Technology => "technology",
            Section::Contact => "contact",
        }
    }

    /// Label used in the top navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Solutions",
            Section::Experts => "Experts",
            Section::CaseStudy => "Case Study",
            Section::Pricing => "Pricing",
            Section::Technology => "Technology",
            Section::Contact => "Contact",
        }
    }

    /// Label used inside the drawer, where there is room for the long form.
    pub fn drawer_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Solutions",
            Section::Experts => "Expert Consultants",
            Section::CaseStudy => "Case Studies",
            Section::Pricing => "Pricing",
            Section::Technology => "Technology Expertise",
            Section::Contact => "Contact",
        }
    }
}

/// Sections shown in the top bar (the drawer carries the full list).
pub const NAV_SECTIONS: [Section; 5] = [
    Section::Home,
    Section::Services,
    Section::CaseStudy,
    Section::Pricing,
    Section::Contact,
];

/// Drawer entries with their Font Awesome icon classes.
pub const DRAWER_SECTIONS: [(Section, &str); 7] = [
    (Section::Home, "fa-solid fa-house"),
    (Section::Services, "fa-solid fa-lightbulb"),
    (Section::Experts, "fa-solid fa-users"),
    (Section::CaseStudy, "fa-solid fa-briefcase"),
    (Section::Pricing, "fa-solid fa-tags"),
    (Section::Technology, "fa-solid fa-microchip"),
    (Section::Contact, "fa-solid fa-envelope"),
];

pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
}

pub const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        icon: "AI",
        title: "AI/ML Solutions",
        blurb: "Enterprise AI implementation and integration",
        features: &[
            "Voice AI & conversational agents",
            "LLM integration (Frontier & open-weight via HuggingFace)",
            "Private cloud AI deployment",
            "Computer vision & OCR",
        ],
        price: "$15K - $100K",
    },
    ServiceCard {
        icon: "AIoT",
        title: "AIoT Platforms",
        blurb: "AI-powered IoT systems at enterprise scale",
        features: &[
            "Smart Grid & utilities IoT",
            "Fleet tracking & telematics",
            "Carrier-grade deployments",
            "Edge computing & sensors",
        ],
        price: "$50K - $300K",
    },
    ServiceCard {
        icon: "CTO",
        title: "Fractional CTO",
        blurb: "Strategic technical leadership without full-time cost",
        features: &[
            "Technology strategy & roadmap",
            "Enterprise architecture (TOGAF)",
            "Team building & mentoring",
            "Technical due diligence",
        ],
        price: "$3K - $10K/month",
    },
    ServiceCard {
        icon: "API",
        title: "API & Integration",
        blurb: "Connect systems and automate workflows",
        features: &[
            "Third-party API integrations",
            "Workflow automation",
            "Data pipeline & ETL",
            "Custom middleware & microservices",
        ],
        price: "$3K - $30K",
    },
    ServiceCard {
        icon: "DEV",
        title: "Software Development",
        blurb: "Custom enterprise applications built for scale",
        features: &[
            "Web & mobile applications",
            "SaaS platform development",
            "Enterprise dashboards",
            "Legacy system modernization",
        ],
        price: "$10K - $150K",
    },
    ServiceCard {
        icon: "XR",
        title: "3D/AR/VR/XR",
        blurb: "Immersive experiences and digital twins",
        features: &[
            "3D digital twin platforms",
            "AR/VR applications",
            "3D visualization & CAD",
            "Mixed reality solutions",
        ],
        price: "$20K - $150K",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "26+", label: "Years Experience" },
    Stat { value: "$360M", label: "Platform Exit" },
    Stat { value: "7", label: "Global Carrier Deployments" },
    Stat { value: "100%", label: "Client Satisfaction" },
];

pub struct ExpertCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    pub blurb: &'static str,
}

pub const EXPERTS: [ExpertCard; 21] = [
    ExpertCard {
        icon: "fa-solid fa-brain",
        title: "Local AI/ML Specialist",
        experience: "10+ years experience",
        blurb: "On-device AI, edge computing, model optimization, offline-first ML systems",
    },
    ExpertCard {
        icon: "fa-solid fa-network-wired",
        title: "IoT Architecture Expert",
        experience: "12+ years experience",
        blurb: "Smart cities, industrial IoT, sensor networks, real-time data processing",
    },
    ExpertCard {
        icon: "fa-solid fa-globe",
        title: "Telecommunications IoT Specialist",
        experience: "15+ years experience",
        blurb: "Carrier-grade IoT deployments for Sprint, Verizon, AT&T, Telstra, STC, Ooredoo, Saudi NIC",
    },
    ExpertCard {
        icon: "fa-solid fa-bolt",
        title: "Utilities & Smart Grid Expert",
        experience: "12+ years experience",
        blurb: "Smart Grid, Smart Meter, Water Network Monitoring for National Utilities (Saudi Arabia, UAE, Qatar)",
    },
    ExpertCard {
        icon: "fa-solid fa-map-location-dot",
        title: "Fleet Management Specialist",
        experience: "15+ years experience",
        blurb: "GPS tracking, telematics, mobile workforce solutions, logistics optimization",
    },
    ExpertCard {
        icon: "fa-solid fa-building-columns",
        title: "Enterprise Architect",
        experience: "20+ years experience",
        blurb: "TOGAF certified, system integration, digital transformation, legacy modernization",
    },
    ExpertCard {
        icon: "fa-solid fa-chart-line",
        title: "Data Engineering Specialist",
        experience: "12+ years experience",
        blurb: "ETL pipelines, data warehousing, analytics platforms, real-time data sync",
    },
    ExpertCard {
        icon: "fa-solid fa-gears",
        title: "SaaS Architecture Expert",
        experience: "16+ years experience",
        blurb: "Multi-tenancy, subscription billing, horizontal scaling, SaaS metrics optimization",
    },
    ExpertCard {
        icon: "fa-solid fa-gem",
        title: "Product Development Expert",
        experience: "15+ years experience",
        blurb: "0-to-1 product building, MVP development, product-market fit, launch strategy",
    },
    ExpertCard {
        icon: "fa-solid fa-bullseye",
        title: "Performance & Scalability Specialist",
        experience: "15+ years experience",
        blurb: "Robustness engineering, horizontal scaling, load optimization, sub-second response times",
    },
    ExpertCard {
        icon: "fa-solid fa-cloud",
        title: "Multi-Cloud Architect",
        experience: "14+ years experience",
        blurb: "AWS, Azure, GCP, hybrid cloud, cost optimization, cloud migration strategies",
    },
    ExpertCard {
        icon: "fa-solid fa-shield-halved",
        title: "Security Architect",
        experience: "12+ years experience",
        blurb: "Application security, penetration testing, OWASP standards, zero-trust architecture",
    },
    ExpertCard {
        icon: "fa-solid fa-city",
        title: "Smart City Consultant",
        experience: "10+ years experience",
        blurb: "Smart utilities, smart ports, smart energy, connected infrastructure",
    },
    ExpertCard {
        icon: "fa-solid fa-car",
        title: "Automotive Systems Expert",
        experience: "12+ years experience",
        blurb: "Infotainment systems, navigation, telematics, embedded automotive electronics",
    },
    ExpertCard {
        icon: "fa-solid fa-credit-card",
        title: "Banking Automation Specialist",
        experience: "10+ years experience",
        blurb: "Fully automated bank branch (zero staff), remote monitoring & auto-repair for ATMs, cash management systems",
    },
    ExpertCard {
        icon: "fa-solid fa-graduation-cap",
        title: "EdTech Consultant",
        experience: "10+ years experience",
        blurb: "Learning management systems, educational platforms, SaaS for education",
    },
    ExpertCard {
        icon: "fa-solid fa-flask",
        title: "QA Automation Specialist",
        experience: "12+ years experience",
        blurb: "Test automation, CI/CD pipelines, regression testing, quality assurance frameworks",
    },
    ExpertCard {
        icon: "fa-solid fa-triangle-exclamation",
        title: "Chaos Engineering Expert",
        experience: "10+ years experience",
        blurb: "Resilience testing, fault injection, disaster recovery, high-availability systems",
    },
    ExpertCard {
        icon: "fa-solid fa-wand-magic-sparkles",
        title: "UI/UX Design Expert",
        experience: "10+ years experience",
        blurb: "User-centered design, design systems, responsive interfaces, accessibility standards",
    },
    ExpertCard {
        icon: "fa-solid fa-scale-balanced",
        title: "Islamic FinTech Specialist",
        experience: "14+ years experience",
        blurb: "Shariah-compliant payment systems, Islamic banking automation, Takaful platforms, halal e-commerce",
    },
    ExpertCard {
        icon: "fa-solid fa-cart-shopping",
        title: "Halal Retail & E-Commerce Expert",
        experience: "12+ years experience",
        blurb: "Shariah-compliant retail systems, halal product verification, ethical supply chains, Islamic e-commerce",
    },
];

pub struct CaseStudy {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub challenge: &'static str,
    pub solution: &'static [&'static str],
    pub results: &'static [Stat],
    pub technologies: &'static str,
}

pub const CASE_STUDIES: [CaseStudy; 8] = [
    CaseStudy {
        title: "Awāni Voice Assistant",
        tags: &["Voice AI", "Full-Stack", "Production"],
        challenge: "Built an AI-powered voice assistant for the trucking industry from scratch, requiring real-time voice processing, natural language understanding, and integration with logistics systems.",
        solution: &[
            "Designed and developed full-stack Voice AI platform",
            "Implemented proprietary API for natural language processing",
            "Built Flutter mobile app + React dashboard",
            "Deployed scalable backend on Multi-Cloud",
        ],
        results: &[
            Stat { value: "Trucking", label: "Industry-specific Voice AI SaaS" },
            Stat { value: "90%", label: "Voice accuracy" },
        ],
        technologies: "React, TypeScript, Node.js, Flutter, Multi-Cloud, Proprietary Multi-AI Models, WebSockets, High-Performance RDBMS, Distributed In-Memory Cache, IaC, Containers",
    },
    CaseStudy {
        title: "Mobility Platform",
        tags: &["IoT", "Enterprise Scale", "Acquisition"],
        challenge: "Lead tech consultants for a startup building GPS tracking and video telematics platform from ground zero for commercial fleets, insurance companies, and government agencies.",
        solution: &[
            "Architected enterprise-grade mobility platform from scratch",
            "Built GPS tracking, video telematics, and mobile workforce solutions",
            "Scaled infrastructure to support millions of concurrent messages",
            "Implemented carrier-grade reliability and real-time data processing",
        ],
        results: &[
            Stat { value: "$360M", label: "Platform later acquired by Global Mobility Leader" },
            Stat { value: "Ground Zero", label: "Built from scratch as founding tech team" },
            Stat { value: "Enterprise", label: "Thousands of mobility customers across North America" },
        ],
        technologies: "Java Spring Boot, High-Performance RDBMS, Distributed In-Memory Cache, Multi-Cloud, GPS/Telematics APIs, Video Streaming, Mobile Development, Enterprise Architecture, IaC, Containers",
    },
    CaseStudy {
        title: "Smart Grid & Smart Meter IoT",
        tags: &["IoT", "Utilities", "Enterprise"],
        challenge: "Deployed Smart Grid and Smart Meter IoT software optimization for Global Energy Infrastructure Provider working with National Utility Authority, requiring utility-grade reliability and real-time monitoring.",
        solution: &[
            "Optimized large-scale utility IoT platform deployment",
            "Implemented real-time grid monitoring and analytics systems",
            "Built smart meter data management and optimization layer",
            "Deployed mission-critical infrastructure at national utility scale",
        ],
        results: &[
            Stat { value: "National", label: "Utility Authority deployment" },
            Stat { value: "Utility-Grade", label: "Mission-critical reliability" },
            Stat { value: "Real-Time", label: "Grid monitoring & analytics" },
        ],
        technologies: "IoT Platform Architecture, SCADA Systems, Real-Time Analytics, High-Performance RDBMS, Time-Series Databases, MQTT, Microservices, High Availability Systems",
    },
    CaseStudy {
        title: "Water Network Monitoring IoT",
        tags: &["IoT", "Utilities", "MENA"],
        challenge: "Deployed Water Network Monitoring Systems for Gulf Region Utility Authorities requiring real-time leak detection, pressure monitoring, and network-wide analytics for critical water infrastructure.",
        solution: &[
            "Deployed water network IoT monitoring infrastructure",
            "Implemented real-time leak detection and pressure management systems",
            "Built network-wide analytics and reporting dashboards",
            "Integrated with existing SCADA and utility management systems",
        ],
        results: &[
            Stat { value: "2 Countries", label: "Deployed in Gulf Region utilities" },
            Stat { value: "Real-Time", label: "Network monitoring & leak detection" },
            Stat { value: "Critical", label: "Water infrastructure operations" },
        ],
        technologies: "IoT Sensors, SCADA Integration, Real-Time Monitoring, Time-Series Databases, GIS Systems, MQTT, High-Performance RDBMS, Analytics Dashboards",
    },
    CaseStudy {
        title: "EdTech SaaS Platform",
        tags: &["SaaS", "Education", "Enterprise"],
        challenge: "Built enterprise SaaS platform for educational institutions requiring multi-tenant architecture, role-based access control, and scalable content delivery for thousands of concurrent users.",
        solution: &[
            "Architected multi-tenant SaaS platform with isolated data models",
            "Implemented scalable backend infrastructure on cloud",
            "Built comprehensive admin dashboard and student portal",
            "Deployed enterprise security and RBAC systems",
        ],
        results: &[
            Stat { value: "8 Years", label: "Leading the platform" },
            Stat { value: "Enterprise", label: "Multiple educational institutions served" },
        ],
        technologies: "Java Spring Boot, High-Performance RDBMS, Distributed In-Memory Cache, Multi-Cloud, Multi-tenant Architecture, RBAC, RESTful APIs, Microservices, IaC, Containers, K8s",
    },
    CaseStudy {
        title: "Private Cloud Enterprise AI Platform",
        tags: &["AI/ML", "Enterprise", "Government", "Security"],
        challenge: "Enterprises and government organizations requiring AI capabilities while maintaining complete data sovereignty and IP privacy. Built secure, on-premises LLM deployment with enterprise chat platform to replace security-compromised commercial messaging apps.",
        solution: &[
            "Deployed open-source LLM models in private data centers (on-premises)",
            "Built enterprise chat application with AI bot integration",
            "Implemented end-to-end encryption and air-gapped deployment options",
            "Created secure alternative to commercial messaging apps for government & enterprise use",
        ],
        results: &[
            Stat { value: "100%", label: "Data sovereignty & IP privacy" },
            Stat { value: "On-Prem", label: "Private cloud/DC deployment" },
            Stat { value: "Gov/Enterprise", label: "Secure messaging for sensitive orgs" },
        ],
        technologies: "Open-Source LLMs, Private Cloud Infrastructure, K8s, IaC, Containers, End-to-End Encryption, Air-Gapped Networks, Enterprise Chat, Python, High-Performance RDBMS, Distributed In-Memory Cache",
    },
    CaseStudy {
        title: "Enterprise Analytics Platform",
        tags: &["Full-Stack", "API Integration", "B2B"],
        challenge: "A logistics company needed a unified dashboard to aggregate data from 5+ different systems (TMS, ERP, GPS tracking, fuel cards, maintenance) with real-time synchronization and custom reporting.",
        solution: &[
            "Built REST API middleware to normalize data from disparate systems",
            "Implemented automated data sync pipelines with distributed caching",
            "Created React dashboard with role-based access control",
            "Designed database schema optimized for reporting queries",
        ],
        results: &[
            Stat { value: "80%", label: "Reduction in manual data entry" },
            Stat { value: "5min", label: "Real-time data sync" },
            Stat { value: "15+", label: "Custom reports generated" },
        ],
        technologies: "React, Node.js, Express, High-Performance RDBMS, Distributed In-Memory Cache, REST APIs, JWT Auth, Containers, Multi-Cloud",
    },
    CaseStudy {
        title: "Self-Powered IoT Gateway",
        tags: &["IoT", "Hardware", "Innovation"],
        challenge: "Designed ultra-compact, self-powered IoT gateway (size of a debit card) for remote sensor deployments requiring energy harvesting, low-power operation, and reliable connectivity in challenging environments.",
        solution: &[
            "Architected debit card-sized form factor with integrated energy harvesting",
            "Implemented ultra-low-power sensor aggregation and edge processing",
            "Built multi-protocol connectivity (5G/6G eSIM, NB-IoT, WiFi)",
            "Designed for solar/kinetic/thermal energy harvesting capabilities",
        ],
        results: &[
            Stat { value: "Card Size", label: "Debit card dimensions (length & width)" },
            Stat { value: "Self-Powered", label: "Energy harvesting capabilities" },
            Stat { value: "Edge", label: "On-device processing & aggregation" },
        ],
        technologies: "Embedded Systems, ARM Cortex, 5G/6G eSIM, NB-IoT, Energy Harvesting, Ultra-Low-Power Design, Edge Computing, C/C++, MQTT",
    },
];

pub struct PricingTier {
    pub name: &'static str,
    pub amount: &'static str,
    pub timeline: &'static str,
    pub features: &'static [&'static str],
    pub badge: &'static str,
    pub featured: bool,
}

pub const PRICING_TIERS: [PricingTier; 4] = [
    PricingTier {
        name: "Rapid",
        amount: "$500 - $2K",
        timeline: "1-3 days",
        features: &[
            "✓ Bug fixes",
            "✓ Simple feature additions",
            "✓ Code reviews",
            "✓ Performance audits",
        ],
        badge: "Quick Wins",
        featured: false,
    },
    PricingTier {
        name: "Standard",
        amount: "$3K - $15K",
        timeline: "1-4 weeks",
        features: &[
            "✓ API integrations",
            "✓ Small custom applications",
            "✓ Database optimization",
            "✓ Technical audits",
        ],
        badge: "Defined Scope",
        featured: true,
    },
    PricingTier {
        name: "Premium",
        amount: "$20K - $100K+",
        timeline: "4-16 weeks",
        features: &[
            "✓ AI/ML integration",
            "✓ Full application development",
            "✓ Legacy system modernization",
            "✓ Technical transformation",
        ],
        badge: "Major Initiatives",
        featured: false,
    },
    PricingTier {
        name: "Retainer",
        amount: "$3K - $10K/mo",
        timeline: "Ongoing",
        features: &[
            "✓ Fractional CTO (10-20hr/mo)",
            "✓ Technical advisory",
            "✓ Development support",
            "✓ Priority access",
        ],
        badge: "Long-Term",
        featured: false,
    },
];

pub struct TechCategory {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

pub const TECH_CATEGORIES: [TechCategory; 6] = [
    TechCategory {
        name: "Frontend & Mobile",
        tags: &[
            "React", "TypeScript", "Next.js", "Flutter", "React Native", "Swift/SwiftUI",
            "Kotlin/Jetpack Compose", "Vite", "Tailwind CSS", "Vue.js",
        ],
    },
    TechCategory {
        name: "Backend & APIs",
        tags: &[
            "Node.js", "Express", "Java Spring Boot", "Python", "WebSocket", "REST APIs",
            "GraphQL", "Microservices",
        ],
    },
    TechCategory {
        name: "AI & Voice",
        tags: &[
            "Multi-Model AI Integration", "Voice AI", "Speech-to-Text", "LLM Fine-Tuning",
            "Computer Vision", "LangChain",
        ],
    },
    TechCategory {
        name: "Data & Cloud",
        tags: &[
            "High-Performance RDBMS", "In-Memory Caching", "MongoDB", "Time-Series DBs",
            "Multi-Cloud", "Edge Computing",
        ],
    },
    TechCategory {
        name: "DevOps & Infrastructure",
        tags: &[
            "Containers", "K8s", "IaC", "CI/CD", "Nginx", "Monitoring & Observability",
            "Playwright",
        ],
    },
    TechCategory {
        name: "IoT & Embedded",
        tags: &[
            "SCADA", "MQTT", "Sensor Networks", "ARM Cortex", "Energy Harvesting",
            "5G/NB-IoT",
        ],
    },
];
