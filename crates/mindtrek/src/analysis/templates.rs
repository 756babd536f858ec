//! Fixed content used by the analysis generator

pub const ROADMAP: [&str; 15] = [
  // Week 1: design
  "1. Research target users and market needs (2 days)",
  "2. Create user personas and user journey maps (1 day)",
  "3. Design wireframes and mockups (2 days)",
  "4. Get feedback on design from potential users (1 day)",
  "5. Finalize MVP feature list (1 day)",
  // Week 2: development
  "6. Set up development environment and project structure (1 day)",
  "7. Implement core functionality (3 days)",
  "8. Create basic UI components (1 day)",
  "9. Connect backend services and APIs (1 day)",
  "10. Internal testing and bug fixes (1 day)",
  // Week 3: launch and feedback
  "11. Deploy to staging environment (1 day)",
  "12. Conduct user acceptance testing (1 day)",
  "13. Make improvements based on feedback (2 days)",
  "14. Prepare marketing materials (1 day)",
  "15. Launch MVP and collect initial user feedback (1 day)",
];

pub const HOW_TO_START: [&str; 7] = [
  "1. Learn the fundamentals of web/mobile development (1-2 weeks)",
  "2. Set up your development environment with the recommended tech stack (1 day)",
  "3. Create a GitHub repository with a clear README and project structure (1 day)",
  "4. Build a simple prototype focusing on core functionality (1 week)",
  "5. Join relevant online communities to network and get feedback (ongoing)",
  "6. Find a mentor or co-founder with experience in this domain (2-4 weeks)",
  "7. Create a simple landing page to gauge interest (2-3 days)",
];

pub const LAUNCH_CHECKLIST: [&str; 10] = [
  "Register a domain name",
  "Set up hosting and deployment pipeline",
  "Create social media accounts",
  "Write documentation and help guides",
  "Prepare press kit and promotional materials",
  "Set up analytics to track user behavior",
  "Create a feedback collection system",
  "Plan an initial marketing push",
  "Set up a system for bug reporting",
  "Prepare a roadmap for post-MVP features",
];

// Wireframes (Mermaid flowcharts)
// ===============================

pub const MOBILE_WIREFRAME: &str = "graph TD
    A[Home Screen] --> B[Feature 1]
    A --> C[Feature 2]
    A --> D[Settings]
    B --> E[Sub-Feature 1.1]
    B --> F[Sub-Feature 1.2]
    C --> G[Sub-Feature 2.1]
    D --> H[Profile]
    D --> I[Preferences]
    H --> J[Edit Profile]";

pub const WEBSITE_WIREFRAME: &str = "graph TD
    A[Landing Page] --> B[Features]
    A --> C[Pricing]
    A --> D[About Us]
    A --> E[Login/Signup]
    E --> F[Dashboard]
    F --> G[User Profile]
    F --> H[Main Feature]
    F --> I[Analytics]
    H --> J[Sub-Feature 1]
    H --> K[Sub-Feature 2]";

pub const ANALYTICS_WIREFRAME: &str = "graph TD
    A[Dashboard] --> B[Data Input]
    A --> C[Analysis Results]
    A --> D[Settings]
    B --> E[Manual Entry]
    B --> F[Import Data]
    C --> G[Visualizations]
    C --> H[Insights]
    C --> I[Export]
    D --> J[Model Settings]
    D --> K[User Preferences]";

pub const GENERIC_WIREFRAME: &str = "graph TD
    A[Homepage] --> B[Core Feature]
    A --> C[Secondary Feature]
    A --> D[User Account]
    B --> E[Feature Details]
    B --> F[Actions]
    C --> G[Sub-Feature]
    D --> H[Profile]
    D --> I[Settings]
    F --> J[Results]";

// Candidate lists for randomized fields
// =====================================

pub const PROJECT_PREFIXES: [&str; 10] =
  ["Smart", "Quick", "Easy", "Pro", "Insta", "Ultra", "Meta", "Hyper", "Quantum", "Super"];

pub const PROJECT_FEATURES: [&str; 10] = [
  "machine learning capabilities",
  "blockchain integration",
  "AR/VR features",
  "social networking",
  "real-time analytics",
  "gamification elements",
  "subscription options",
  "mobile-first approach",
  "voice commands",
  "recommendation engine",
];

pub const IMPROVEMENTS: [&str; 10] = [
  "predict user needs",
  "optimize performance",
  "personalize recommendations",
  "automate repetitive tasks",
  "enhance data visualization",
  "improve decision-making",
  "streamline workflow",
  "reduce costs",
  "increase engagement",
  "scale operations",
];

pub const SOCIAL_FEATURES: [&str; 10] = [
  "share their achievements",
  "collaborate on projects",
  "engage in friendly competitions",
  "form communities of interest",
  "mentor each other",
  "rate and review services",
  "create and share content",
  "participate in challenges",
  "build professional networks",
  "exchange tips and tricks",
];

pub const MARKETPLACE_FEATURES: [&str; 10] = [
  "users can buy and sell related products",
  "professionals can offer their services",
  "creators can monetize their content",
  "companies can advertise relevant solutions",
  "experts can provide consulting services",
  "users can exchange resources",
  "brands can sponsor user activities",
  "developers can sell plugins and extensions",
  "influencers can promote featured items",
  "users can trade digital assets",
];

/// Value propositions after the first, which depends on the idea text
pub const VALUE_PROPOSITIONS: [&str; 9] = [
  "Gain valuable insights through advanced analytics and visualization",
  "Streamline workflow and improve collaboration among team members",
  "Reduce costs while improving quality and performance",
  "Enhance user experience with intuitive design and personalization",
  "Access powerful tools previously only available to large enterprises",
  "Connect with a community of like-minded individuals",
  "Make better decisions with data-driven recommendations",
  "Simplify complex processes into manageable steps",
  "Achieve goals faster with targeted guidance and support",
];

pub const REVENUE_STREAMS: [&str; 10] = [
  "Freemium model with premium features available through subscription",
  "Monthly subscription with tiered pricing based on usage or features",
  "One-time purchase with optional add-ons",
  "Transaction fees on marketplace exchanges",
  "B2B SaaS model with annual contracts",
  "Free for basic users, paid for enterprise clients",
  "Ad-supported free tier with ad-free premium option",
  "Affiliate marketing and referral partnerships",
  "Usage-based pricing model",
  "White-label licensing for enterprise customers",
];

pub const MARKETING_STRATEGIES: [&str; 10] = [
  "Content marketing through blog posts, ebooks, and tutorials",
  "Social media marketing focusing on platform-specific content",
  "Search engine optimization (SEO) to drive organic traffic",
  "Referral program incentivizing users to invite others",
  "Partnerships with complementary services and influencers",
  "Community building through events and online forums",
  "Email marketing with personalized campaigns",
  "Free trials and demos to showcase value",
  "Product hunt launch and tech community outreach",
  "Targeted paid advertising on relevant platforms",
];

pub const COMPETITIVE_ADVANTAGES: [&str; 10] = [
  "Proprietary technology that improves efficiency by 30%",
  "Unique approach combining multiple disciplines for better results",
  "First-mover advantage in an emerging market segment",
  "Superior user experience based on extensive research",
  "More affordable solution without sacrificing quality",
  "Integration capabilities with existing popular tools",
  "Specialized focus on an underserved niche market",
  "Data-driven insights unavailable from competitors",
  "Stronger privacy and security measures",
  "Open ecosystem encouraging third-party development",
];

pub const PROJECT_URLS: [&str; 2] =
  ["https://github.com/example/project1", "https://github.com/example/project2"];
