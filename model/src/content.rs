//! Static site content.

use crate::route::Route;
use crate::types::*;

pub const BRAND: &str = "SuRover";

pub const NAV: &[NavEntry] = &[
    NavEntry { label: "Home", route: Route::Home },
    NavEntry { label: "Expos", route: Route::Expos },
    NavEntry { label: "Sponsors", route: Route::Sponsors },
    NavEntry { label: "Programs", route: Route::Programs },
    NavEntry { label: "Team", route: Route::Team },
];

// Hero / about

pub const HERO_TITLE: &str = "ERC Opening Sequence — 30 Seconds of Vision";

pub const HERO_DESCRIPTION: &str = "Autonomy in tough terrain, precise manipulation, and a robust \
architecture. SuRover is a multidisciplinary exploration platform developed through \
university–industry collaboration.";

pub const ABOUT_TITLE: &str = "What is a rover?";

pub const ABOUT_TEXT: &str = "Answer: an autonomous field robot that traverses challenging terrain, \
perceives its environment, makes decisions, and executes tasks. SuRover is designed modularly for \
exploration, sample collection, and remote operation scenarios.";

pub const ABOUT_TAGS: &[&str] = &["4WS/4WD", "ROS2", "CAN Bus", "RTK GNSS", "ZED2 / LiDAR"];

pub const ROVERS_INTRO: &str = "We've built two generations so far. Meet Legacy and Venom.";

pub const ROVERS: &[RoverEntry] = &[
    RoverEntry {
        name: "Legacy",
        caption: "our first competition-ready platform; the base for early autonomy and \
manipulator experiments.",
        image: "https://images.unsplash.com/photo-1542051841857-5f90071e7989?q=80&w=1200&auto=format&fit=crop",
    },
    RoverEntry {
        name: "Venom",
        caption: "our latest rover with improved chassis stiffness, serviceability, and upgraded \
compute & sensing.",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=1200&auto=format&fit=crop",
    },
];

pub const SYSTEMS: &[SystemDescriptor] = &[
    SystemDescriptor {
        key: SystemKey::Drivetrain,
        title: "Drivetrain",
        summary: "Mobility, steering, and terrain negotiation.",
        points: &[
            "4WS/4WD with independent steering/drive modules",
            "Kinematics and odometry implemented in ROS2",
            "Telemetry relay over Wi‑Fi & long‑range RF link",
            "Custom RViz mission dashboard",
            "Command queueing & state visualization",
            "Carbon Fiber Monocoque Chassis",
        ],
    },
    SystemDescriptor {
        key: SystemKey::Arm,
        title: "Arm",
        summary: "Precision manipulation and sample collection.",
        points: &[
            "6‑DOF modular arm (Maxon EC + EPOS4)",
            "EtherCAT communication",
            "Forward/Inverse Kinematics (FK/IK) with singularity avoidance",
            "Trajectory generation and smooth motion control",
            "Kinematic & dynamic simulations for tuning",
        ],
    },
    SystemDescriptor {
        key: SystemKey::Autonomy,
        title: "Autonomy",
        summary: "Localization, mapping, and navigation stack.",
        points: &[
            "Visual‑Inertial SLAM (ZED2/RealSense + IMU)",
            "RTK GNSS and IMU sensor fusion (Kalman Filtering)",
            "Trajectory generation and tracking",
            "URDF modeling and Gazebo simulation",
            "Digital system integration and simulation",
        ],
    },
    SystemDescriptor {
        key: SystemKey::Power,
        title: "Power & Electronics",
        summary: "Energy distribution, communication, and safety backbone.",
        points: &[
            "Custom NMC Li‑ion battery with high‑reliability protection",
            "Portenta with micro‑ROS",
            "Custom PCB design for sensor and transceiver integration",
            "Long‑range RF communication & data link",
            "RTK GNSS, IMU, camera, and LiDAR integration",
        ],
    },
    SystemDescriptor {
        key: SystemKey::Science,
        title: "Science Kit",
        summary: "Field research payload for in‑situ sample analysis.",
        points: &[
            "Arm‑mounted sampling scoop and drill",
            "On‑board analysis: pH, moisture, conductivity, temperature",
            "Custom made Raman Spectrometer",
            "Data logging to science dashboard",
        ],
    },
];

// Expos

pub const EXPOS: &[ExpoEntry] = &[
    ExpoEntry {
        name: "SAHA EXPO 2024",
        status: ExpoStatus::Participated,
        description: "Participated with Sabancı University IMC (SUIMC). We exhibited the Legacy \
rover and introduced our new prototype. We met with major companies such as Altınay and TUSAŞ, \
presented our architecture, and discussed potential collaborations. As one of Turkey's largest \
defense & aerospace fairs, SAHA EXPO 2024 provided high visibility and networking across industry \
and academia.",
        image: Some("https://images.unsplash.com/photo-1581091215367-59ab6c3b83b1?q=80&w=1600&auto=format&fit=crop"),
    },
    ExpoEntry {
        name: "IDEF 2025",
        status: ExpoStatus::Participated,
        description: "Attended with TUSAŞ and showcased the Venom rover. We demonstrated the \
upgraded platform and established a connection with TÜBİTAK Uzay. IDEF 2025 allowed us to present \
our latest vehicle to a broader audience and strengthen strategic partnerships.",
        image: Some("https://images.unsplash.com/photo-1581092334651-ddf26d9c7c1f?q=80&w=1600&auto=format&fit=crop"),
    },
    ExpoEntry {
        name: "IAC 2026 Antalya",
        status: ExpoStatus::Upcoming,
        description: "Planned participation together with TÜBİTAK Uzay at an international space \
congress scale, highlighting the research capability of our student–industry collaboration.",
        image: None,
    },
    ExpoEntry {
        name: "SAHA EXPO 2026",
        status: ExpoStatus::Upcoming,
        description: "Returning with our next-generation rover prototype, focusing on improved \
mobility, autonomy, and operations readiness for field demonstrations.",
        image: None,
    },
];

/// Expos with the given status, in their defined order.
pub fn expos_with_status(status: ExpoStatus) -> impl Iterator<Item = &'static ExpoEntry> {
    EXPOS.iter().filter(move |expo| expo.status == status)
}

// Sponsors

pub const SPONSORS_STATEMENT: &str = "We are proud to be supported by leading institutions and \
companies who share our vision for innovation in robotics and technology. Their collaboration \
empowers our students to push the limits of engineering and exploration.";

// Programs

pub const PROGRAMS_INTRO: &str = "Supported by six national and international programs that \
accelerate our research, field-readiness, and student growth. These partnerships connect our \
multidisciplinary team with industry-grade tooling, mentorship, and competition pathways.";

pub const PROGRAM_BLURB: &str = "Part of our ecosystem of support spanning sponsorship, hardware \
access, mentorship, and competition participation.";

pub const PROGRAMS: &[ProgramEntry] = &[
    ProgramEntry {
        name: "Maxon Young Engineers Programme",
        note: Some("Only team selected from Turkey"),
    },
    ProgramEntry { name: "TUSAŞ Student Project Support Programme", note: None },
    ProgramEntry { name: "T3 Foundation – Student Project Teams Support Programme", note: None },
    ProgramEntry {
        name: "TÜBİTAK (4001) National & International Competition Participation Support",
        note: None,
    },
    ProgramEntry { name: "TÜBİTAK National Technology Clubs Union", note: None },
    ProgramEntry { name: "Arduino Support Program", note: None },
];

pub const PROGRAM_HIGHLIGHTS: &[&str] = &[
    "Maxon YEP: tooling, mentorship, expertise transfer",
    "TUSAŞ: student project support and collaboration",
    "T3: student teams funding & operations enablement",
    "TÜBİTAK 4001: competition participation support",
    "TÜBİTAK NT Clubs Union: community & resources",
    "Arduino: hardware support for rapid prototyping",
];

// Team

pub const TEAM_INTRO: &str = "Meet our captains and subteams powering SuRover.";

pub const CAPTAINS: &[TeamMember] = &[
    TeamMember {
        name: "Mahmut",
        email: "mahmut@surover.org",
        photo: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?q=80&w=400&h=400&fit=crop&auto=format",
    },
    TeamMember {
        name: "Barış Bakırdöven",
        email: "baris@surover.org",
        photo: "https://images.unsplash.com/photo-1607746882042-944635dfe10e?q=80&w=400&h=400&fit=crop&auto=format",
    },
];

pub const SUBTEAMS: &[Subteam] = &[
    Subteam { key: "mechanics", title: "Mechanics" },
    Subteam { key: "software", title: "Software" },
    Subteam { key: "electronics", title: "Electronics" },
    Subteam { key: "science", title: "Science" },
    Subteam { key: "management", title: "Management" },
];

pub const SUBTEAM_PLACEHOLDER: &str = "Headshots and roster coming soon.";

// Footer

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", href: "https://instagram.com" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { label: "YouTube", href: "https://youtube.com" },
];
