use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertAccent {
    Green,
    Blue,
    Purple,
    Orange,
}

impl CertAccent {
    // css class on the certificate card
    pub fn class(&self) -> &'static str {
        match self {
            CertAccent::Green => "cert-card cert-green",
            CertAccent::Blue => "cert-card cert-blue",
            CertAccent::Purple => "cert-card cert-purple",
            CertAccent::Orange => "cert-card cert-orange",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Certificate {
    pub id: i64,
    pub title: &'static str,
    pub kind: &'static str,
    pub platform: &'static str,
    pub accent: CertAccent,
    pub verify_url: &'static str,
}

pub static CERTIFICATES: [Certificate; 13] = [
    Certificate {
        id: 1,
        title: "CSS (Basic)",
        kind: "SKILL",
        platform: "HackerRank",
        accent: CertAccent::Green,
        verify_url: "https://www.hackerrank.com/certificates/iframe/f0898450a5b6",
    },
    Certificate {
        id: 2,
        title: "Frontend Developer (React)",
        kind: "ROLE",
        platform: "HackerRank",
        accent: CertAccent::Blue,
        verify_url: "https://www.hackerrank.com/certificates/iframe/c1c9bb699c19",
    },
    Certificate {
        id: 3,
        title: "JavaScript (Basic)",
        kind: "SKILL",
        platform: "HackerRank",
        accent: CertAccent::Green,
        verify_url: "https://www.hackerrank.com/certificates/iframe/b47073695de5",
    },
    Certificate {
        id: 4,
        title: "JavaScript (Intermediate)",
        kind: "SKILL",
        platform: "HackerRank",
        accent: CertAccent::Green,
        verify_url: "https://www.hackerrank.com/certificates/iframe/8dc4425e4d5b",
    },
    Certificate {
        id: 5,
        title: "React (Basic)",
        kind: "SKILL",
        platform: "HackerRank",
        accent: CertAccent::Green,
        verify_url: "https://www.hackerrank.com/certificates/iframe/8d26b57bbbc7",
    },
    Certificate {
        id: 6,
        title: "Node.js (Intermediate)",
        kind: "SKILL",
        platform: "HackerRank",
        accent: CertAccent::Green,
        verify_url: "https://www.hackerrank.com/certificates/iframe/d1c2c42375e2",
    },
    Certificate {
        id: 7,
        title: "Rest API (Intermediate)",
        kind: "SKILL",
        platform: "HackerRank",
        accent: CertAccent::Green,
        verify_url: "https://www.hackerrank.com/certificates/iframe/500f58747a73",
    },
    Certificate {
        id: 8,
        title: "Azure Fundamentals",
        kind: "CLOUD",
        platform: "Simpli Learn",
        accent: CertAccent::Purple,
        verify_url: "https://simpli-web.app.link/e/RtEUVFxjxVb",
    },
    Certificate {
        id: 9,
        title: "Introduction to Azure Services",
        kind: "CLOUD",
        platform: "Simpli Learn",
        accent: CertAccent::Purple,
        verify_url: "https://simpli-web.app.link/e/XH83InKjxVb",
    },
    Certificate {
        id: 10,
        title: "GitHub Copilot Fundamentals",
        kind: "AI/TOOL",
        platform: "Simpli Learn",
        accent: CertAccent::Purple,
        verify_url: "https://simpli-web.app.link/e/1yHAesLjxVb",
    },
    Certificate {
        id: 11,
        title: "Gateway Load Balancer",
        kind: "CLOUD",
        platform: "Simpli Learn",
        accent: CertAccent::Purple,
        verify_url: "https://simpli-web.app.link/e/RGGfPcSjxVb",
    },
    Certificate {
        id: 12,
        title: "Solutions Architecture Job Simulation",
        kind: "PROJECT",
        platform: "Forage",
        accent: CertAccent::Orange,
        verify_url: "https://res.cloudinary.com/dhyds3low/image/upload/v1754280999/gMTdCXwDdLYoXZ3wG_ifobHAoMjQs9s6bKS_8dK7zfpKsmBnMpAyL_1751459226433_completion_certificate_page-0001_nyahfe.jpg",
    },
    Certificate {
        id: 13,
        title: "Software Engineering Job Simulation",
        kind: "PROJECT",
        platform: "Forage",
        accent: CertAccent::Orange,
        verify_url: "https://res.cloudinary.com/dhyds3low/image/upload/v1754281071/software-engineering-certificate_page-0001_r8xkqg.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_ids_are_unique() {
        for (i, a) in CERTIFICATES.iter().enumerate() {
            for b in CERTIFICATES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn verify_urls_are_absolute() {
        for cert in CERTIFICATES.iter() {
            assert!(cert.verify_url.starts_with("https://"), "{}", cert.title);
        }
    }
}
