//! Static course and event lists shown on the page.

use std::fmt;

/// Neon accent used for card borders, icons and text highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowColor {
    Cyan,
    Pink,
    Purple,
    Yellow,
}

impl GlowColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlowColor::Cyan => "cyan",
            GlowColor::Pink => "pink",
            GlowColor::Purple => "purple",
            GlowColor::Yellow => "yellow",
        }
    }

    /// `r, g, b` triple for box-shadow glows.
    pub fn rgb(&self) -> &'static str {
        match self {
            GlowColor::Cyan => "0, 240, 255",
            GlowColor::Pink => "255, 56, 100",
            GlowColor::Purple => "110, 13, 255",
            GlowColor::Yellow => "255, 223, 0",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Curated display order for the difficulty filter.
    pub const ORDERED: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon glyph drawn on a course card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseIcon {
    Chip,
    Shield,
    Headset,
    Bot,
    Code,
    Network,
}

impl CourseIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CourseIcon::Chip => "🧠",
            CourseIcon::Shield => "🛡",
            CourseIcon::Headset => "🥽",
            CourseIcon::Bot => "🤖",
            CourseIcon::Code => "</>",
            CourseIcon::Network => "🕸",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: CourseIcon,
    pub color: GlowColor,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub duration: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub image_url: &'static str,
    pub color: GlowColor,
}

pub static COURSES: &[Course] = &[
    Course {
        id: 1,
        title: "Neural Interface Development",
        description: "Learn to design and program neural interfaces for direct brain-computer communication.",
        icon: CourseIcon::Chip,
        color: GlowColor::Cyan,
        category: "Engineering",
        difficulty: Difficulty::Advanced,
        duration: "16 weeks",
    },
    Course {
        id: 2,
        title: "Quantum Encryption",
        description: "Master the principles and applications of quantum cryptography for unhackable communications.",
        icon: CourseIcon::Shield,
        color: GlowColor::Pink,
        category: "Cybersecurity",
        difficulty: Difficulty::Advanced,
        duration: "14 weeks",
    },
    Course {
        id: 3,
        title: "Full-Stack Metaverse Development",
        description: "Build immersive, persistent virtual worlds with advanced networking and physics.",
        icon: CourseIcon::Headset,
        color: GlowColor::Purple,
        category: "Programming",
        difficulty: Difficulty::Intermediate,
        duration: "20 weeks",
    },
    Course {
        id: 4,
        title: "Advanced Synthetic Intelligence",
        description: "Create and deploy autonomous AI systems with ethical constraints and human-like reasoning.",
        icon: CourseIcon::Bot,
        color: GlowColor::Cyan,
        category: "AI & ML",
        difficulty: Difficulty::Advanced,
        duration: "18 weeks",
    },
    Course {
        id: 5,
        title: "Digital Identity Protection",
        description: "Learn to secure personal and corporate digital identities against next-gen threats.",
        icon: CourseIcon::Shield,
        color: GlowColor::Yellow,
        category: "Cybersecurity",
        difficulty: Difficulty::Beginner,
        duration: "12 weeks",
    },
    Course {
        id: 6,
        title: "Holographic Interface Design",
        description: "Design intuitive holographic user interfaces for spatial computing environments.",
        icon: CourseIcon::Code,
        color: GlowColor::Pink,
        category: "Design",
        difficulty: Difficulty::Intermediate,
        duration: "10 weeks",
    },
    Course {
        id: 7,
        title: "Decentralized Network Architecture",
        description: "Design resilient mesh networks for autonomous systems and smart city infrastructure.",
        icon: CourseIcon::Network,
        color: GlowColor::Purple,
        category: "Networking",
        difficulty: Difficulty::Intermediate,
        duration: "14 weeks",
    },
    Course {
        id: 8,
        title: "Augmented Reality Systems",
        description: "Build next-generation AR applications for industrial, medical, and entertainment uses.",
        icon: CourseIcon::Headset,
        color: GlowColor::Cyan,
        category: "Programming",
        difficulty: Difficulty::Beginner,
        duration: "16 weeks",
    },
];

pub static EVENTS: &[Event] = &[
    Event {
        id: 1,
        title: "Neural Interface Symposium",
        description: "Join world-leading experts for discussions on the future of brain-computer interfaces and neural augmentation.",
        date: "June 15, 2025",
        time: "10:00 AM - 4:00 PM",
        location: "Main Auditorium",
        image_url: "https://images.pexels.com/photos/2007647/pexels-photo-2007647.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        color: GlowColor::Cyan,
    },
    Event {
        id: 2,
        title: "Cybersecurity Hackathon",
        description: "Test your skills against simulated next-gen threats in our annual cybersecurity competition.",
        date: "July 8-10, 2025",
        time: "All Day Event",
        location: "Tech Labs, Building C",
        image_url: "https://images.pexels.com/photos/5380642/pexels-photo-5380642.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        color: GlowColor::Pink,
    },
    Event {
        id: 3,
        title: "AR/VR Career Expo",
        description: "Connect with leading technology companies seeking talent in augmented and virtual reality development.",
        date: "August 22, 2025",
        time: "1:00 PM - 6:00 PM",
        location: "Innovation Center",
        image_url: "https://images.pexels.com/photos/6804581/pexels-photo-6804581.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        color: GlowColor::Purple,
    },
    Event {
        id: 4,
        title: "AI Ethics Conference",
        description: "Explore the ethical implications of advanced AI systems and synthetic intelligence with industry leaders.",
        date: "September 5, 2025",
        time: "9:00 AM - 5:00 PM",
        location: "Conference Hall, Building A",
        image_url: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        color: GlowColor::Yellow,
    },
    Event {
        id: 5,
        title: "Quantum Computing Workshop",
        description: "Hands-on introduction to quantum computing principles and programming for beginners and enthusiasts.",
        date: "October 12, 2025",
        time: "10:00 AM - 3:00 PM",
        location: "Quantum Lab, Building D",
        image_url: "https://images.pexels.com/photos/373543/pexels-photo-373543.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        color: GlowColor::Cyan,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let course_ids: HashSet<u32> = COURSES.iter().map(|c| c.id).collect();
        assert_eq!(course_ids.len(), COURSES.len());
        let event_ids: HashSet<u32> = EVENTS.iter().map(|e| e.id).collect();
        assert_eq!(event_ids.len(), EVENTS.len());
    }

    #[test]
    fn course_catalog_shape() {
        assert_eq!(COURSES.len(), 8);
        let categories: HashSet<&str> = COURSES.iter().map(|c| c.category).collect();
        assert_eq!(categories.len(), 6);
        let difficulties: HashSet<&str> = COURSES.iter().map(|c| c.difficulty.as_str()).collect();
        assert_eq!(difficulties.len(), 3);
    }
}
