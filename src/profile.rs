//! Static profile record rendered by every section.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `&'static Profile` as context; sections read it with
//! `expect_context`. Nothing mutates it after startup.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub short_bio: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub socials: Socials,
    pub education: &'static [Education],
    pub experience: &'static [Experience],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
}

#[derive(Debug)]
pub struct Socials {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub leetcode: &'static str,
}

#[derive(Debug)]
pub struct Education {
    pub year: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub desc: &'static str,
}

#[derive(Debug)]
pub struct Experience {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub desc: &'static str,
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub desc: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with the display spacing removed.
    #[must_use]
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

/// In-page sections in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Expertise,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Expertise, Self::Projects, Self::Contact];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Expertise => "expertise",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Expertise => "Expertise",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub static PROFILE: Profile = Profile {
    name: "INBASURYA B",
    first_name: "INBA",
    last_name: "SURYA",
    title: "AI & ML Specialist | Full-Stack Web Developer",
    tagline: "Technologist & Innovator",
    short_bio: "I am a highly motivated B.Tech student in Computer Science and Engineering with a deep focus on \
        Artificial Intelligence and Machine Learning. My expertise lies in bridging the gap between intelligent \
        data-driven models and robust full-stack web architectures. I am passionate about building scalable \
        digital solutions that prioritize user integrity and solve complex real-world problems through \
        innovative coding and algorithmic efficiency.",
    email: "inbasurya32@gmail.com",
    phone: "+91 9360681545",
    location: "Based in Chennai, Tamil Nadu",
    socials: Socials {
        github: "https://github.com/Inbasurya",
        linkedin: "https://www.linkedin.com/in/inba-surya-lin1545/",
        leetcode: "#",
    },
    education: &[Education {
        year: "2022 - 2026",
        degree: "B.Tech in CS & Engineering (AI)",
        institution: "Dr. M.G.R. Educational & Research Institute",
        desc: "Currently pursuing a specialized degree in Artificial Intelligence and Machine Learning with a \
            strong academic standing of 7.5 CGPA. My coursework includes advanced studies in Data Structures, \
            Object-Oriented Programming, and Database Management Systems. I am actively involved in \
            research-oriented projects that explore the practical applications of neural networks and \
            predictive analytics within modern software environments.",
    }],
    experience: &[Experience {
        year: "July 2025 - Aug 2025",
        role: "AI & ML Intern",
        company: "Gateway Software Solutions",
        desc: "During this intensive internship, I focused on data preprocessing and exploratory data analysis \
            (EDA) using professional tools like Pandas and Matplotlib. I built and evaluated several machine \
            learning models, including Linear and Logistic Regression, achieving an impressive classification \
            accuracy of 85%. This role allowed me to translate complex theoretical AI concepts into practical \
            business solutions, significantly enhancing operational efficiency and data-driven decision-making.",
    }],
    skills: &[
        Skill { name: "Python & ML", category: "AI Core" },
        Skill { name: "JavaScript/ES6", category: "Frontend" },
        Skill { name: "Flask & Node.js", category: "Backend" },
        Skill { name: "SQL & Databases", category: "Data" },
        Skill { name: "UI/UX Design", category: "Design" },
        Skill { name: "IoT Integration", category: "Systems" },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Healthcare CRM Scheduler",
            category: "Full-Stack Web",
            image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&q=80&w=800",
            link: "https://github.com/Inbasurya/CRM-HOSPITAL",
            desc: "Designed and implemented a secure healthcare platform using Flask and SQL for streamlined \
                medical record management. I integrated the Twilio API to handle automated SMS reminders, which \
                effectively reduced missed patient appointments by 30%. The system features a robust role-based \
                access control for patients and doctors, successfully cutting down manual scheduling time by \
                nearly 40% while ensuring data privacy.",
        },
        Project {
            id: 2,
            title: "IoT Smart Agriculture",
            category: "IoT + Cloud",
            image: "https://images.unsplash.com/photo-1560493676-04071c5f467b?auto=format&fit=crop&q=80&w=800",
            link: "https://github.com/Inbasurya/CRM-HOSPITAL",
            desc: "Developed an intelligent monitoring system using Arduino and ESP8266 sensors to track soil \
                moisture and air humidity in real-time. I leveraged the Blynk IoT platform for cloud-based data \
                visualization, allowing farmers to monitor crop health remotely via smartphone alerts. This \
                automated irrigation approach successfully reduced water consumption by 20% while significantly \
                improving crop yield through precise environmental control.",
        },
    ],
};
