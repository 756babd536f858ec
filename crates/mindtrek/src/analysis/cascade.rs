//! Keyword cascades
//!
//! Ordered `(keywords, value)` rule tables. A rule matches when the lowercased
//! idea contains any of its keywords as a substring; the first matching rule
//! wins and the fallback covers everything else.

use serde::{Deserialize, Serialize};

use super::templates;

/// One row of a cascade
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
  pub keywords: &'static [&'static str],
  pub value: T,
}

impl<T> Rule<T> {
  pub fn matches(&self, lowered: &str) -> bool {
    self.keywords.iter().any(|keyword| lowered.contains(keyword))
  }
}

/// Ordered rule table evaluated first-match-wins
#[derive(Debug, Clone, Copy)]
pub struct KeywordCascade<T: 'static> {
  pub rules: &'static [Rule<T>],
  pub fallback: T,
}

impl<T: Copy> KeywordCascade<T> {
  /// Value of the first rule matching `lowered`, or the fallback
  pub fn select(&self, lowered: &str) -> T {
    self.rules.iter().find(|rule| rule.matches(lowered)).map_or(self.fallback, |rule| rule.value)
  }
}

// Wireframes
// ==========

/// Which of the four wireframe templates an idea gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wireframe {
  Mobile,
  Website,
  Analytics,
  Generic,
}

impl Wireframe {
  pub fn template(&self) -> &'static str {
    match self {
      Wireframe::Mobile => templates::MOBILE_WIREFRAME,
      Wireframe::Website => templates::WEBSITE_WIREFRAME,
      Wireframe::Analytics => templates::ANALYTICS_WIREFRAME,
      Wireframe::Generic => templates::GENERIC_WIREFRAME,
    }
  }
}

pub const WIREFRAMES: KeywordCascade<Wireframe> = KeywordCascade {
  rules: &[
    Rule { keywords: &["app", "mobile"], value: Wireframe::Mobile },
    Rule { keywords: &["website", "web", "platform"], value: Wireframe::Website },
    Rule { keywords: &["ai", "machine learning", "analytics"], value: Wireframe::Analytics },
  ],
  fallback: Wireframe::Generic,
};

// Tech stack
// ==========

pub const FRONTEND: KeywordCascade<&str> = KeywordCascade {
  rules: &[Rule { keywords: &["mobile", "app"], value: "- Frontend: React Native / Flutter" }],
  fallback: "- Frontend: React.js with Next.js",
};

pub const BACKEND: KeywordCascade<&str> = KeywordCascade {
  rules: &[
    Rule { keywords: &["ai", "machine learning"], value: "- Backend: Python (Flask/FastAPI), Node.js" },
    Rule { keywords: &["scale", "enterprise"], value: "- Backend: Java Spring Boot / Go" },
  ],
  fallback: "- Backend: Node.js with Express",
};

pub const DATABASE: KeywordCascade<&str> = KeywordCascade {
  rules: &[
    Rule { keywords: &["data", "analytics"], value: "- Database: PostgreSQL, MongoDB for analytics" },
    Rule { keywords: &["real-time", "chat"], value: "- Database: Firebase Firestore / MongoDB" },
  ],
  fallback: "- Database: Supabase (PostgreSQL)",
};

pub const AUTHENTICATION_LINE: &str = "- Authentication: Supabase Auth / Auth0";

/// Optional services, emitted in table order for every matching row
pub const OPTIONAL_SERVICES: [Rule<&str>; 5] = [
  Rule { keywords: &["payment", "subscription"], value: "- Payments: Stripe" },
  Rule { keywords: &["email", "notification"], value: "- Notifications: SendGrid / Twilio" },
  Rule { keywords: &["analytics", "tracking"], value: "- Analytics: Google Analytics / Mixpanel" },
  Rule { keywords: &["ai", "machine learning"], value: "- AI/ML: TensorFlow / PyTorch / OpenAI API" },
  Rule { keywords: &["file", "upload", "image"], value: "- Storage: AWS S3 / Cloudinary" },
];

pub const DEPLOYMENT_LINE: &str =
  "- Deployment: Vercel / Netlify for frontend, Docker with AWS/GCP for backend";

/// Recommended stack for an idea, in fixed category order
pub fn tech_stack(lowered: &str) -> Vec<String> {
  let mut stack = vec![
    FRONTEND.select(lowered),
    BACKEND.select(lowered),
    DATABASE.select(lowered),
    AUTHENTICATION_LINE,
  ];

  stack.extend(OPTIONAL_SERVICES.iter().filter(|rule| rule.matches(lowered)).map(|rule| rule.value));
  stack.push(DEPLOYMENT_LINE);

  stack.into_iter().map(String::from).collect()
}

// Business model
// ==============

pub const TARGET_USERS: KeywordCascade<&str> = KeywordCascade {
  rules: &[
    Rule { keywords: &["business", "enterprise"], value: "Small to medium-sized businesses and enterprise clients" },
    Rule { keywords: &["developer", "code"], value: "Software engineers, developers and technical teams" },
    Rule { keywords: &["design", "creative"], value: "Designers, creators and creative professionals" },
    Rule { keywords: &["health", "fitness"], value: "Health-conscious individuals and fitness enthusiasts" },
    Rule { keywords: &["education", "learn"], value: "Students, educators and lifelong learners" },
    Rule { keywords: &["finance", "money"], value: "Financial professionals and individuals managing personal finances" },
  ],
  fallback: "Tech-savvy early adopters and general consumers seeking innovative solutions",
};
