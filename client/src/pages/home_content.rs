//! Landing page copy and the small state rules behind it.

#[cfg(test)]
#[path = "home_content_test.rs"]
mod home_content_test;

/// Hero text and app preview for one audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub preview_title: &'static str,
    pub preview_description: &'static str,
    pub details_title: &'static str,
    pub details: &'static [&'static str],
}

/// Business types offered by the landing page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusinessKind {
    Restaurant,
    Salon,
    Clinic,
    Other,
}

impl BusinessKind {
    pub const ALL: [Self; 4] = [Self::Restaurant, Self::Salon, Self::Clinic, Self::Other];

    pub fn name(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Salon => "Hair & Beauty Salon",
            Self::Clinic => "Medical Practice / Clinic",
            Self::Other => "Other Service",
        }
    }

    pub fn hero(self) -> &'static HeroContent {
        match self {
            Self::Restaurant => &RESTAURANT_HERO,
            Self::Salon => &SALON_HERO,
            Self::Clinic => &CLINIC_HERO,
            Self::Other => &OTHER_HERO,
        }
    }
}

pub const DEFAULT_HERO: HeroContent = HeroContent {
    title: "Running a business and want booking to be simple?",
    subtitle: "ONLINE BOOKING FOR RESTAURANTS, SALONS AND SMALL BUSINESSES",
    description: "Leave the appointments to us and focus on what matters: your business. \
                  Tablekit takes the busywork out of booking so you have more time to grow.",
    preview_title: "App Preview",
    preview_description: "Picture your own booking page here, styled for your business.",
    details_title: "Typical Opening Hours",
    details: &["Mon-Fri: 9:00 - 17:00", "30 and 60 minute slots"],
};

const RESTAURANT_HERO: HeroContent = HeroContent {
    title: "Own a restaurant? Rethink table booking.",
    subtitle: "ONLINE TABLE BOOKING FOR RESTAURANTS",
    description: "Lay out your dining room, let guests pick a table, and spend less time on the phone.",
    preview_title: "Restaurant Booking System",
    preview_description: "See the floor plan your guests will book from.",
    details_title: "Hours and Booking",
    details: &["Mon-Sun: 12:00 - 23:00", "Online table booking around the clock"],
};

const SALON_HERO: HeroContent = HeroContent {
    title: "Run a salon? Give clients easy online booking.",
    subtitle: "BOOKING FOR HAIR AND BEAUTY SALONS",
    description: "An always-open calendar that fills your chairs without filling your inbox.",
    preview_title: "Salon Scheduler",
    preview_description: "Show off a clean, friendly booking calendar for your salon.",
    details_title: "Available Slots",
    details: &["Tue-Fri: 08:00 - 20:00", "Sat: 09:00 - 16:00"],
};

const CLINIC_HERO: HeroContent = HeroContent {
    title: "Run a practice? Simplify patient check-in.",
    subtitle: "ONLINE APPOINTMENTS FOR CLINICS",
    description: "Plan the day ahead and cut waiting times with online appointments. \
                  More time for patients, less paperwork.",
    preview_title: "Patient Portal Preview",
    preview_description: "A patient-friendly appointment page that keeps the front desk calm.",
    details_title: "Consulting Hours",
    details: &["Mon-Fri: 08:00 - 18:00", "Book by phone or online"],
};

const OTHER_HERO: HeroContent = HeroContent {
    title: "Offer a service? Manage client appointments with ease.",
    subtitle: "BOOKING FOR EVERY KIND OF SERVICE",
    description: "Consulting, tutoring, coaching or any one-to-one service: keep every booking in one place.",
    preview_title: "General Scheduler",
    preview_description: "A flexible booking page for any kind of business.",
    details_title: "Availability",
    details: &["By arrangement", "Online booking any time"],
};

/// Hero for the selected business type, or the generic pitch.
pub fn hero_for(selected: Option<BusinessKind>) -> &'static HeroContent {
    selected.map_or(&DEFAULT_HERO, BusinessKind::hero)
}

/// One "how it works" step.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "Sign Up and Set Up",
        description: "Create your account in minutes and draw your floor plan in the builder.",
    },
    Step {
        title: "Share Your Booking Page",
        description: "Link guests straight to your tables or embed the page on your site.",
    },
    Step {
        title: "Manage Bookings",
        description: "See which tables are taken at a glance, from anywhere.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Since we switched to Tablekit our admin work has dropped and guests love booking online.",
        name: "Anna Nagy",
        role: "Owner, Harmony Restaurant",
    },
    Testimonial {
        quote: "Clear, easy to run, and my clients like it too. I can only recommend it.",
        name: "Bela Kovacs",
        role: "Master Stylist, Style Salon",
    },
    Testimonial {
        quote: "Booking is far more convenient for our patients, and the schedule finally holds.",
        name: "Dr. Zsuzsanna Kiss",
        role: "Dentist, DentalCare Clinic",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqItem; 4] = [
    FaqItem {
        question: "How does the booking system work?",
        answer: "Guests see your free tables or slots and book the one that suits them. \
                 You see every booking as it happens and manage your calendar in one place.",
    },
    FaqItem {
        question: "What kind of business is it for?",
        answer: "Almost any service where customers need a slot: restaurants, salons, \
                 clinics, massage studios, consultants and gyms.",
    },
    FaqItem {
        question: "Can I match the booking page to my brand?",
        answer: "Yes, the booking page can be customised to fit the look of your business.",
    },
    FaqItem {
        question: "Is there a free trial?",
        answer: "There is a free plan with limited features, and trials are available for the premium plans. \
                 Get in touch for details.",
    },
];

pub const PARTNERS: [&str; 6] =
    ["Partner Co.", "Innovate Ltd.", "Super Salon", "Modern Practice", "Pro Master", "NextGen Ltd."];

/// Single-open accordion: clicking the open item closes it, any other opens it.
pub fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

/// Star rating line, e.g. "4.9 based on 125 reviews".
pub fn rating_summary(rating: f64, reviews: Option<u32>) -> String {
    match reviews {
        Some(n) => format!("{rating:.1} based on {n} reviews"),
        None => format!("{rating:.1}"),
    }
}

/// Whether star `index` (0-based, out of five) is filled for `rating`.
pub fn star_filled(index: u32, rating: f64) -> bool {
    f64::from(index) < rating.floor()
}
