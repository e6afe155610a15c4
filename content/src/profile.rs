use serde::Serialize;

// the static personal data rendered by the Home, About and Contact pages

pub static NAME: &str = "Kalp Patel";
pub static TAGLINE: &str = "WELCOME TO MY WORLD";
pub static INTRO: &str = "I build clean, scalable, and user-friendly web applications \
with a focus on modern design and real-world impact.";

pub static PORTRAIT_URL: &str =
    "https://res.cloudinary.com/dhyds3low/image/upload/v1756541323/file_00000000f8cc62439b42c2e0a5758ffa_ll4x87.png";

pub static RESUME_URL: &str =
    "https://drive.google.com/file/d/1B1GL7eVZ_NaaZ7cA-j01znxR2crmtDK7/view?usp=sharing";

pub const EMAIL: &str = "kalppatel1209@gmail.com";
pub const PHONE: &str = "+91 99788*****";
pub const LOCATION: &str = "Ahmedabad, Gujarat, India";

// headline labels cycled on the home page
pub static ROLES: [&str; 2] = ["MERN Stack Developer", "UI/UX Enthusiast"];

pub static BIO: [&str; 3] = [
    "I'm a Computer Science student and passionate web developer from India. I enjoy \
     building scalable applications and crafting intuitive user experiences with \
     technologies like React, Node.js, and MongoDB.",
    "My current focus is on mastering state management, advanced MongoDB queries, and \
     full-stack deployment practices. I also explore UI/UX design, using tools like \
     Figma and Tailwind CSS to create clean and user-friendly interfaces.",
    "Beyond coding, I'm a national-level discus throw athlete, which has taught me \
     discipline, resilience, and how to thrive under pressure - qualities I carry into \
     my tech journey.",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: &'static str,
}

pub static DETAILS: [Detail; 8] = [
    Detail { label: "First Name", value: "Kalp" },
    Detail { label: "Last Name", value: "Patel" },
    Detail { label: "Age", value: "18 Years" },
    Detail { label: "Nationality", value: "Indian" },
    Detail { label: "Address", value: LOCATION },
    Detail { label: "Phone", value: PHONE },
    Detail { label: "Email", value: EMAIL },
    Detail { label: "Languages", value: "English, Hindi, Gujarati" },
];

pub static SKILLS: [&str; 22] = [
    "HTML5",
    "JavaScript",
    "C++",
    "CSS3",
    "AWS",
    "Google Cloud",
    "Cloudflare",
    "Netlify",
    "Vercel",
    "Firebase",
    "Chakra",
    "Context-API",
    "Express.js",
    "JWT",
    "MUI",
    "NodeJS",
    "React",
    "Vite",
    "TailwindCSS",
    "MongoDB",
    "Figma",
    "Canva",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct School {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
    pub summary: &'static str,
}

pub static EDUCATION: [School; 2] = [
    School {
        degree: "B.Tech in Computer Science",
        institution: "Gujarat Technological University",
        years: "2024 - present",
        summary: "Core computer science with a focus on web technologies, databases and \
                  software engineering practice.",
    },
    School {
        degree: "Higher Secondary (Science)",
        institution: "Ahmedabad, Gujarat",
        years: "2022 - 2024",
        summary: "Mathematics and computer science stream alongside national-level \
                  athletics.",
    },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub static SOCIALS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", url: "https://github.com/kalp-cg" },
    SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/in/kalp-patel" },
    SocialLink { name: "Instagram", url: "https://www.instagram.com/kalp.cg" },
];
