//! Static copy and asset paths for the site.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SITE_META: SiteMeta = SiteMeta {
    title: "Puffistery - Sweet Dessert Dreams",
    description: "A cozy corner of the internet where dessert dreams come to life",
};

pub const BRAND: &str = "Puffistery";
pub const HERO_TITLE: &str = "Welcome to Puffistery";
pub const HERO_TAGLINE: &str = "A cozy corner of the internet where dessert dreams come to life";
pub const HERO_IMAGE: &str = "/logopuff.jpg";
pub const HERO_IMAGE_ALT: &str = "Featured dessert";
pub const STEAM_TEXTURE: &str = "/steam.png";
pub const LOADING_ANIMATION_DATA: &str = "/animations/cupcake.json";
pub const LOADING_CAPTION: &str = "Baking something sweet...";

pub const HERO_CTA_URL: &str = "https://www.instagram.com/puffistery/";
pub const HERO_CTA_LABEL: &str = "Follow on Instagram 🍰";
pub const MENU_CTA_URL: &str = "https://instagram.com/YOUR_PROFILE_HERE";
pub const MENU_CTA_LABEL: &str = "Follow on Instagram";

pub const ABOUT_HEADING: &str = "Our Sweet Story";
pub const ABOUT_INTRO: &str =
    "Welcome to Puffistery, a cozy corner of the internet where dessert dreams come to life.";
pub const ABOUT_CLOSING: &str = "\"So whether you're here to watch satisfying dessert reels or just enjoy the fluff, we're happy you stopped by. 💕🍰\"";

pub const CONTACT_HEADING: &str = "Let's Bake Something Sweet Together 🍰";
pub const CONTACT_BLURB: &str =
    "Have a question, want to place an order, or interested in a collaboration? Drop us a message!";

pub const FOOTER_NOTE: &str = "Puffistery. All rights sweet. 🧁";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Home", anchor: "#home" },
    NavItem { label: "About", anchor: "#about" },
    NavItem { label: "Contact", anchor: "#contact" },
];

/// Which column the image sits in for a desktop timeline row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn row_class(self) -> &'static str {
        match self {
            Self::Left => "timeline-row",
            Self::Right => "timeline-row is-reversed",
        }
    }

    pub fn text_align(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Horizontal offset the row slides in from, in pixels.
    pub fn enter_offset_px(self) -> f64 {
        match self {
            Self::Left => -50.0,
            Self::Right => 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link_url: &'static str,
    pub image_path: &'static str,
}

impl TimelineEntry {
    pub fn side(index: usize) -> TimelineSide {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        year: "The Beginning",
        title: "A Sweet Start",
        description: "What started as a fun way to share baking moments turned into a love letter to sugar, spice, and everything puffed just right.",
        link_url: "https://www.instagram.com/p/DGizdDJtzgR/?igsh=NW1oNDFuOTJ0YzZ2",
        image_path: "/timeline1.jpg",
    },
    TimelineEntry {
        year: "The Journey",
        title: "Baking with Heart",
        description: "At Puffistery, baking isn't just a hobby — it's pure joy. Every cupcake swirl, every caramel drizzle, every flaky crust is made with heart and a sprinkle of magic.",
        link_url: "https://www.instagram.com/p/DEA5M4dNGOA/?igsh=YWIwdDRvb21hb2o5",
        image_path: "/timeline2.jpg",
    },
    TimelineEntry {
        year: "The Mission",
        title: "Connecting Through Sweets",
        description: "We believe desserts should bring smiles, spark creativity, and connect people — one sweet bite at a time.",
        link_url: "https://www.instagram.com/p/DFYH1y0NC4i/?img_index=2&igsh=MXFsZDB2cTNpcjdvaw==",
        image_path: "/timeline3.jpg",
    },
];
