//! Built-in profile content for the static site sections.

use crate::model::profile::{
    About, Contact, Footer, Hero, Highlight, Milestone, NavLink, School, SkillGroup,
};

pub const OWNER: &str = "Eitmam Omar Sanam";

/// Primary navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Academics", href: "#academics" },
    NavLink { label: "Blog", href: "#blog" },
    NavLink { label: "Timeline", href: "#timeline" },
];

pub const HERO: Hero = Hero {
    kicker: "Portfolio & Blog",
    headline: "Engineer • Innovator • Problem Solver",
    intro: "Exploring the intersection of electronics and intelligence, from coding and AI to IoT, \
            microcontrollers, and PCB design. I build solutions, experiment with ideas, and share \
            my projects here.",
    video_asset: "vid3.mp4",
};

pub const ABOUT: About = About {
    owner: OWNER,
    heading: "Building at the edge of electronics and intelligence",
    paragraphs: &[
        "I'm an undergraduate student in Electrical and Electronics Engineering with a strong \
         interest in hardware, robotics, and embedded systems. Most of my time goes into \
         programming and making projects with STM32, Arduino, and ESP32 microcontrollers, PCB \
         design, and experimenting with sensors to bring ideas to life.",
        "I enjoy being hands-on: debugging a circuit, programming a microcontroller, or testing \
         out a new hardware setup. Alongside electronics, I also explore Python programming, \
         which helps me connect hardware projects with smarter, software-driven intelligence.",
        "What excites me most is problem-solving and tinkering: taking something from concept to \
         prototype, learning by doing, and building technology that can have a real impact.",
    ],
    highlights: &[
        Highlight { label: "Focus", value: "IoT • Embedded • ML" },
        Highlight { label: "Currently", value: "Programming with STM32" },
    ],
    portrait_asset: "sanam.jpg",
};

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup { name: "Languages", items: &["C", "Python", "JavaScript", "MATLAB"] },
    SkillGroup { name: "Frameworks", items: &["React", "Node JS", "scikit-learn", "Numpy"] },
    SkillGroup { name: "Hardware / CAD", items: &["Arduino", "ESP32", "Stm32", "Altium"] },
    SkillGroup {
        name: "Cloud / DevOps",
        items: &["Docker", "GitHub Actions", "Firebase", "Vercel"],
    },
];

pub const SCHOOLS: &[School] = &[
    School { level: "School", name: "Monipur High School", location: "Mirpur, Dhaka" },
    School {
        level: "College",
        name: "Adamjee Cantonment College",
        location: "Dhaka Cantonment, Dhaka",
    },
    School {
        level: "University",
        name: "Rajshahi University of Engineering and Technology",
        location: "Rajshahi",
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        date: "2025",
        title: "Quadcopter FC v2",
        text: "Implemented sensor fusion + telemetry dashboard.",
    },
    Milestone {
        date: "2024",
        title: "Internship @ Robotics Lab",
        text: "Worked on ROS nodes and SLAM prototyping.",
    },
    Milestone {
        date: "2023",
        title: "University Project Showcase",
        text: "Presented IoT energy monitor with live web UI.",
    },
];

pub const CTA_HEADING: &str = "Want feedback on a project?";

pub const CONTACT: Contact = Contact {
    email: "eosanam191384@gmail.com",
    location: "Dhaka, Bangladesh",
    form_fields: &["Full Name", "Email", "Subject", "Message"],
};

/// Footer credit keeps the placeholder name the published site still shows.
pub const FOOTER: Footer = Footer {
    owner: "Your Name",
    socials: &["GitHub", "LinkedIn", "Twitter"],
    subscribe_placeholder: "Subscribe to blog updates",
};
