use serde::{Deserialize, Serialize};

// ids key the persisted like/view counters, so they must stay stable
// across releases
pub type PhotoId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoCategory {
    All,
    Landscape,
    Forest,
    Seascape,
    Flora,
    Winter,
    Desert,
}

pub static PHOTO_CATEGORIES: [PhotoCategory; 7] = [
    PhotoCategory::All,
    PhotoCategory::Landscape,
    PhotoCategory::Forest,
    PhotoCategory::Seascape,
    PhotoCategory::Flora,
    PhotoCategory::Winter,
    PhotoCategory::Desert,
];

impl PhotoCategory {
    pub fn display(&self) -> &'static str {
        match self {
            PhotoCategory::All => "All",
            PhotoCategory::Landscape => "Landscape",
            PhotoCategory::Forest => "Forest",
            PhotoCategory::Seascape => "Seascape",
            PhotoCategory::Flora => "Flora",
            PhotoCategory::Winter => "Winter",
            PhotoCategory::Desert => "Desert",
        }
    }

    pub fn matches(&self, post: &PhotoPost) -> bool {
        match self {
            PhotoCategory::All => true,
            _ => post.category == *self,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhotoPost {
    pub id: PhotoId,
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub category: PhotoCategory,
    pub image: &'static str,
    pub description: &'static str,
}

impl PhotoPost {
    pub fn find(id: PhotoId) -> Option<&'static PhotoPost> {
        PHOTO_POSTS.iter().find(|post| post.id == id)
    }
}

pub static PHOTO_POSTS: [PhotoPost; 7] = [
    PhotoPost {
        id: 1,
        title: "Sunset at Mountain Valley",
        date: "23 March, 2022",
        location: "Mountain Valley",
        category: PhotoCategory::Landscape,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753503476/IMG_20250610_114007_o8nk9s.jpg",
        description: "Beautiful sunset captured at the mountain valley during my hiking trip. \
                      The golden hour light created a magical atmosphere.",
    },
    PhotoPost {
        id: 2,
        title: "Misty Forest Morning",
        date: "10 February, 2022",
        location: "Dense Forest",
        category: PhotoCategory::Forest,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753462419/IMG_20240629_195857_fnchpo.jpg",
        description: "Early morning fog in the dense forest creates a mystical atmosphere. The \
                      sunlight filtering through the trees was breathtaking.",
    },
    PhotoPost {
        id: 3,
        title: "Coastal Waves at Dusk",
        date: "15 January, 2022",
        location: "Rocky Coastline",
        category: PhotoCategory::Seascape,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753462691/IMG_20240705_135916_1_gtjehr.jpg",
        description: "The powerful waves crashing against the rocky coastline during dusk. The \
                      colors of the sky reflected in the water were stunning.",
    },
    PhotoPost {
        id: 4,
        title: "Spring Wildflowers",
        date: "5 December, 2021",
        location: "Wildflower Field",
        category: PhotoCategory::Flora,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753517641/IMG_20250630_215300_zkxchm.jpg",
        description: "A field of colorful wildflowers blooming in early spring. The variety of \
                      colors and textures created a beautiful natural tapestry.",
    },
    PhotoPost {
        id: 5,
        title: "Frozen Lake Reflection",
        date: "20 November, 2021",
        location: "Frozen Lake",
        category: PhotoCategory::Winter,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753517991/IMG_20250726_134721_qojwev.jpg",
        description: "A perfectly still frozen lake reflecting the surrounding mountains. The \
                      winter scene was peaceful and serene.",
    },
    PhotoPost {
        id: 6,
        title: "Desert Sunset Dunes",
        date: "8 October, 2021",
        location: "Golden Desert",
        category: PhotoCategory::Desert,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753518177/IMG_20250609_100248-EDIT_bv3suj.jpg",
        description: "The golden sand dunes of the desert during sunset. The shadows and light \
                      created fascinating patterns across the landscape.",
    },
    PhotoPost {
        id: 7,
        title: "Dunes After the Storm",
        date: "8 October, 2021",
        location: "Golden Desert",
        category: PhotoCategory::Desert,
        image: "https://res.cloudinary.com/demtjxg7q/image/upload/v1753520504/nature.jpg_1_fttbex.jpg",
        description: "Wind-carved ridges across the dunes a few hours after a sandstorm passed \
                      through the valley.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_ids_are_unique() {
        for (i, a) in PHOTO_POSTS.iter().enumerate() {
            for b in PHOTO_POSTS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_post_category_is_filterable() {
        for post in PHOTO_POSTS.iter() {
            assert!(PHOTO_CATEGORIES.contains(&post.category));
            assert_ne!(post.category, PhotoCategory::All);
        }
    }

    #[test]
    fn category_filter_partitions() {
        let desert: Vec<_> = PHOTO_POSTS
            .iter()
            .filter(|p| PhotoCategory::Desert.matches(p))
            .collect();
        assert_eq!(desert.len(), 2);

        let all: Vec<_> = PHOTO_POSTS
            .iter()
            .filter(|p| PhotoCategory::All.matches(p))
            .collect();
        assert_eq!(all.len(), PHOTO_POSTS.len());
    }
}
