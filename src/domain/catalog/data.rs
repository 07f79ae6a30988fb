//! The static catalogue seed data.
//!
//! Defined once at startup and never mutated. Identifiers are not
//! contiguous; entries have been retired from the catalogue over time and
//! their ids are never reused, since persisted favorites reference them.

use once_cell::sync::Lazy;

use super::{Category, Site, Story};
use crate::domain::foundation::{SiteId, StoryId};

/// The full ordered site catalogue.
pub static SITES: Lazy<Vec<Site>> = Lazy::new(|| {
    vec![
        Site {
            id: SiteId::new(1),
            name: "George Town UNESCO World Heritage Site",
            location: "Penang",
            category: Category::Architecture,
            description: "A living testament to Malaysia's multicultural heritage with colonial architecture, Chinese shophouses, and Indian temples.",
            image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/2b/93/54/36/caption.jpg?w=1200&h=-1&s=1",
            heritage: "UNESCO World Heritage Site since 2008",
            visit_info: "Open daily, guided tours available",
            opening_hours: Some("9:00 AM - 5:00 PM"),
            website: Some("https://www.georgetownheritage.com"),
            price: Some("Free (some attractions may have fees)"),
            map_url: Some("https://maps.app.goo.gl/2iCtWUmMjCZzExTDA"),
        },
        Site {
            id: SiteId::new(2),
            name: "Petronas Twin Towers",
            location: "Kuala Lumpur",
            category: Category::Modern,
            description: "Iconic symbol of modern Malaysia, showcasing the nation's architectural prowess and cultural fusion.",
            image: "https://eticket.petronastwintowers.com.my/pettvo.png",
            heritage: "Architectural marvel representing Malaysia's progress",
            visit_info: "Skybridge and observation deck open to visitors",
            opening_hours: Some("10:00 AM - 6:00 PM (Closed Mondays)"),
            website: Some("https://www.petronastwintowers.com.my"),
            price: Some("From RM35 (Malaysian) / RM98 (Non-Malaysian)"),
            map_url: Some("https://maps.app.goo.gl/J39FvZv8q4UQkiFX9"),
        },
        Site {
            id: SiteId::new(3),
            name: "Batu Caves",
            location: "Selangor",
            category: Category::Religious,
            description: "Sacred Hindu temple complex in limestone caves, featuring the world's tallest statue of Lord Murugan.",
            image: "https://images.unsplash.com/photo-1574218705727-e4196d72bfb5?q=80&w=1025&auto=format&fit=crop",
            heritage: "Over 400 million years old limestone formation",
            visit_info: "Open daily, 272 steps to main temple cave",
            opening_hours: Some("6:00 AM - 9:00 PM"),
            website: Some("https://www.batucaves.org"),
            price: Some("Free entry (tours from RM10 - RM50)"),
            map_url: Some("https://www.google.com/maps/place/Batu+Caves/@3.2374599,101.6813484,17z"),
        },
        Site {
            id: SiteId::new(4),
            name: "Malacca Historic City",
            location: "Melaka",
            category: Category::Historical,
            description: "Ancient trading port showcasing Portuguese, Dutch, and British colonial influences alongside Malay heritage.",
            image: "https://publicholidays.com.my/wp-content/uploads/2016/10/Malaysia_MelakaHeritageDay_Output.jpg",
            heritage: "UNESCO World Heritage Site",
            visit_info: "Historic walking trail, museums, and cultural sites",
            opening_hours: Some("Varies by site"),
            website: Some("https://www.malaccatourism.com"),
            price: Some("Varies"),
            map_url: Some("https://maps.app.goo.gl/Rbdcv4QXANh8yhgT7"),
        },
        Site {
            id: SiteId::new(6),
            name: "Sultan Abdul Samad Building",
            location: "Kuala Lumpur",
            category: Category::Colonial,
            description: "Victorian-era architecture with Moorish influences, representing Malaysia's colonial history and independence.",
            image: "https://explore.rehlat.ae/static/media/searchdestination/thingstodo/images/kuala_lumpur/sultan_abdul_samad_building/pexels-phearak-chamrien-13030033.webp",
            heritage: "Built in 1897, witness to Malaysian independence",
            visit_info: "Exterior viewing, guided historical tours available",
            opening_hours: Some("24/7 (Exterior)"),
            website: Some("https://www.kuala-lumpur.ws/attractions/sultan-abdul-samad-building.htm"),
            price: Some("Free"),
            map_url: Some("https://maps.app.goo.gl/GcWAYShyQJULxrSq6"),
        },
        Site {
            id: SiteId::new(7),
            name: "Kek Lok Si Temple",
            location: "Penang",
            category: Category::Religious,
            description: "One of the largest Chinese temple complexes in Southeast Asia, featuring a towering pagoda and a giant statue of Kuan Yin.",
            image: "https://kajabi-storefronts-production.kajabi-cdn.com/kajabi-storefronts-production/file-uploads/blogs/7089/images/647c4e-62-dca-e12d-4c3f2cff0261_Cover_Photo.png",
            heritage: "A major pilgrimage center for Buddhists since 1890.",
            visit_info: "Open daily, dress respectfully.",
            opening_hours: Some("8:30 AM - 5:30 PM"),
            website: Some("https://kekloksitemple.com"),
            price: Some("Free entry (attractions from RM2)"),
            map_url: Some("https://maps.app.goo.gl/UKpTeMxHAwXwnKD99"),
        },
        Site {
            id: SiteId::new(9),
            name: "Istana Budaya",
            location: "Kuala Lumpur",
            category: Category::Modern,
            description: "Malaysia's main venue for theatre, music, and opera, with unique architecture inspired by a traditional Malay kite.",
            image: "https://www.visitselangor.com/wp-content/uploads/Istana-Budaya.jpg",
            heritage: "A symbol of Malaysia's commitment to the performing arts.",
            visit_info: "Check official website for performance schedules.",
            opening_hours: Some("Varies by show"),
            website: Some("https://www.istanabudaya.gov.my"),
            price: Some("Varies by performance"),
            map_url: Some("https://maps.app.goo.gl/T442DzBkmZsiUohUA"),
        },
        Site {
            id: SiteId::new(10),
            name: "A Famosa",
            location: "Melaka",
            category: Category::Colonial,
            description: "The remains of a 16th-century Portuguese fortress. The Porta de Santiago gatehouse is the only part that still stands.",
            image: "https://mkzjm.cdn.setuix.net/resources/blog/a-famosa-st-paul-hill/st.-pauls-church-in-melaka_muhammad-azreen-1-1170x878.jpg",
            heritage: "One of the oldest surviving European architectural remains in Asia.",
            visit_info: "Open to the public, part of the Malacca historic trail.",
            opening_hours: Some("24/7"),
            website: Some("https://www.malacca.ws/attractions/a-famosa-fort.htm"),
            price: Some("Free (nearby attractions may have fees)"),
            map_url: Some("https://www.google.com/maps/place/A+Famosa/@2.1917988,102.0979325,12z"),
        },
        Site {
            id: SiteId::new(12),
            name: "Langkawi Sky Bridge",
            location: "Langkawi",
            category: Category::Modern,
            description: "A stunning 125-metre curved pedestrian bridge offering breathtaking views of the Andaman Sea.",
            image: "https://images.unsplash.com/photo-1727884873350-0c6016db8a74?q=80&w=1170&auto=format&fit=crop",
            heritage: "An engineering marvel and an icon of modern tourism.",
            visit_info: "Accessible via the Langkawi Cable Car.",
            opening_hours: Some("10:00 AM - 7:00 PM"),
            website: Some("https://panoramalangkawi.com/skybridge/"),
            price: Some("From RM43 (Malaysian) / RM85 (Non-Malaysian)"),
            map_url: Some("https://www.google.com/maps/place/Langkawi+Sky+Bridge/@6.3865686,99.6619881"),
        },
        Site {
            id: SiteId::new(14),
            name: "Cheong Fatt Tze Mansion (Blue Mansion)",
            location: "Penang",
            category: Category::Historical,
            description: "An iconic, indigo-blue mansion built in the 19th century, showcasing a blend of Chinese and European architectural styles.",
            image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/26/9c/78/6b/the-mansion-at-dusk.jpg?w=900&h=500&s=1",
            heritage: "An award-winning example of architectural conservation.",
            visit_info: "Guided tours available daily; also operates as a boutique hotel.",
            opening_hours: Some("11:00 AM, 2:00 PM, 3:30 PM (Tour times)"),
            website: Some("https://www.cheongfatttzemansion.com"),
            price: Some("From RM25 (Malaysian) / RM50 (Non-Malaysian)"),
            map_url: Some("https://maps.app.goo.gl/nXB63HETBbHXNBit7"),
        },
        Site {
            id: SiteId::new(15),
            name: "Islamic Arts Museum Malaysia",
            location: "Kuala Lumpur",
            category: Category::Religious,
            description: "The largest museum of Islamic art in Southeast Asia, housing more than seven thousand artifacts from across the Islamic world.",
            image: "https://www.chenhuijing.com/assets/images/posts/iamm/iamm-1280.jpg",
            heritage: "A premier institution for Islamic art and culture.",
            visit_info: "Open daily; features a restaurant and a museum shop.",
            opening_hours: Some("10:00 AM - 6:00 PM"),
            website: Some("https://www.iamm.org.my"),
            price: Some("From RM20 (Malaysian) / RM40 (Non-Malaysian)"),
            map_url: Some("https://maps.app.goo.gl/RoZadJySp6rE64qn9"),
        },
        Site {
            id: SiteId::new(16),
            name: "Taman Negara National Park",
            location: "Pahang",
            category: Category::Natural,
            description: "One of the world's oldest deciduous rainforests, estimated to be 130 million years old.",
            image: "https://www.malaysia.travel/webroot/articles/peekintomalaysia/1140083d6.png",
            heritage: "Ancient Rainforest Ecosystem",
            visit_info: "Accessible via guided tours and jungle trekking.",
            opening_hours: Some("Varies by park office"),
            website: Some("https://www.tamannegara.asia/"),
            price: Some("From RM5 (Malaysian) / RM50 (Non-Malaysian)"),
            map_url: Some("https://www.google.com/maps/place/Taman+Negara+National+Park/@4.5107361,102.3212693,12z"),
        },
        Site {
            id: SiteId::new(17),
            name: "Gunung Mulu National Park",
            location: "Sarawak",
            category: Category::Natural,
            description: "A UNESCO World Heritage site famous for its massive caves and distinctive karst formations.",
            image: "https://upload.wikimedia.org/wikipedia/commons/2/27/Pinnacles_at_Mulu_2.jpg",
            heritage: "Significant for its biodiversity and geological features.",
            visit_info: "Accessible by flight; various caving and trekking tours available.",
            opening_hours: Some("Varies by tour"),
            website: Some("https://mulu.park.org.my"),
            price: Some("From RM30 (Malaysian) / RM150 (Non-Malaysian)"),
            map_url: Some("https://maps.app.goo.gl/r6kUj9qb1VWUPcR1A"),
        },
    ]
});

/// The full ordered story catalogue.
pub static STORIES: Lazy<Vec<Story>> = Lazy::new(|| {
    vec![
        Story {
            id: StoryId::new(1),
            title: "The Legend of Mahsuri",
            category: "Folklore",
            excerpt: "Discover the tragic tale of Langkawi's legendary princess and the seven-generation curse that shaped the island's destiny.",
            image: "https://img.atlasobscura.com/Mps8D0vBFsx4SdGP81xgSR0qiC_klSEx8P-CmTyGnOg/rt:fit/w:1200/q:80/sm:1/scp:1/ar:1/IMG_4186.jpg",
            read_time: "7 min read",
            content: r#"<h3 class="text-2xl font-bold mt-6 mb-4">The Legend of Mahsuri</h3>
<p class="mb-4">The story of Mahsuri is one of Langkawi's most famous and tragic legends, a poignant tale of beauty, jealousy, and a curse that is said to have cast a shadow over the island for seven generations. Mahsuri was a maiden of extraordinary beauty, born in the late 18th century. Her grace and charm were known throughout the island, and she eventually married a warrior named Wan Darus, the brother of the village chief.</p>
<p class="mb-4">When Wan Darus was called away to fight in a war against the Siamese, Mahsuri was left alone. During this time, she befriended a young storyteller and traveler named Deramang. Their friendship, however, became the subject of vicious gossip, fueled by the chief's wife, Wan Mahora, who was consumed by jealousy over Mahsuri's beauty and popularity.</p>
<h4 class="text-xl font-bold mt-6 mb-2">Betrayal and a Dying Curse</h4>
<p class="mb-4">Wan Mahora spread rumors that Mahsuri was unfaithful to her husband. The village elders, without a fair trial, quickly condemned her for adultery. Mahsuri pleaded her innocence, but her cries fell on deaf ears. She was tied to a tree and, according to legend, none of the traditional executioner's keris (daggers) could harm her. Mahsuri, in her despair, revealed that only her family's ceremonial keris could end her life.</p>
<p class="mb-4">When she was stabbed, it is said that white blood flowed from her wound, a definitive sign of her innocence. With her last breath, Mahsuri uttered a curse upon the island of Langkawi, condemning it to seven generations of hardship and misfortune. "There shall be no peace or prosperity on this island for seven generations," she declared.</p>
<h4 class="text-xl font-bold mt-6 mb-2">The Aftermath and Legacy</h4>
<p>Shortly after her death, Langkawi was indeed plunged into a period of great suffering, including a devastating Siamese invasion. For years, the island remained a desolate backwater, its fields barren and its people impoverished. It was only in the late 20th century, after the seven generations had passed, that Langkawi began to transform. The lifting of the curse is often credited with the island's subsequent boom in development and tourism, turning it into the tropical paradise it is today. Mahsuri's Tomb, Makam Mahsuri, now stands as a memorial complex, reminding visitors of the legend that continues to shape the island's identity.</p>"#,
        },
        Story {
            id: StoryId::new(2),
            title: "Peranakan Heritage",
            category: "Culture",
            excerpt: "Explore the unique Straits Chinese culture that blends Chinese traditions with local Malay influences in architecture, cuisine, and customs.",
            image: "https://silverkris.singaporeair.com/wp-content/uploads/2023/12/Pinang-Peranakan-Museum_Penang_1080w.jpg",
            read_time: "8 min read",
            content: r#"<h3 class="text-2xl font-bold mt-6 mb-4">Peranakan Heritage: A Fusion of Cultures</h3>
<p class="mb-4">The Peranakan, also known as the Baba-Nyonya, represent one of Malaysia's most fascinating and unique cultural tapestries. They are the descendants of early Chinese immigrants who settled in the bustling ports of the Malay Archipelago, primarily Malacca, Penang, and Singapore, between the 15th and 17th centuries. Over time, they assimilated with the local Malay culture, creating a vibrant fusion that is distinct and captivating.</p>
<h4 class="text-xl font-bold mt-6 mb-2">A Blend in Every Aspect of Life</h4>
<p class="mb-4">This unique cultural synthesis is evident in almost every facet of Peranakan life. Their language, known as Baba Malay (or Peranakan Patois), is a creole language that combines Hokkien Chinese with Malay. While it is seldom spoken today, it remains a testament to their blended ancestry.</p>
<p class="mb-4">Perhaps the most famous expression of their culture is the Nyonya cuisine. It masterfully combines Chinese cooking techniques and ingredients with the spices and flavors of Malay and Indonesian cooking. Dishes like 'laksa' (a spicy noodle soup) and 'ayam pongteh' (a chicken and potato stew) are beloved throughout Malaysia for their complex and delicious flavors.</p>
<h4 class="text-xl font-bold mt-6 mb-2">Architecture and Artistry</h4>
<p class="mb-4">The architectural style of the Peranakan is equally distinctive. The colorful and ornate shophouses found in the historic districts of George Town and Malacca are iconic examples. These buildings often feature Chinese-style carved-wood panels, English-style windows, and Dutch-style tiles, all harmoniously integrated.</p>
<p>The artistry of the Nyonyas is most beautifully expressed in their traditional attire, the 'Nyonya kebaya'. This exquisite, embroidered blouse, often paired with a batik sarong, is a symbol of their refined tastes. Beaded slippers, known as 'kasut manek', are another example of their intricate craftsmanship. The Peranakan culture, with its rich history and vibrant traditions, is a living example of Malaysia's multicultural identity.</p>"#,
        },
        Story {
            id: StoryId::new(3),
            title: "Traditional Batik Art",
            category: "Arts",
            excerpt: "Journey through the intricate world of Malaysian batik, from ancient techniques to contemporary artistic expressions.",
            image: "https://kalawear.com/cdn/shop/articles/Malaysian_batik_Costume.webp?v=1727249871",
            read_time: "6 min read",
            content: r#"<h3 class="text-2xl font-bold mt-6 mb-4">The Art of Malaysian Batik</h3>
<p class="mb-4">Batik is an ancient and revered art form that involves using wax to create intricate patterns on fabric, which is then dyed. While batik is found in many parts of the world, Malaysian batik is particularly renowned for its vibrant colors, detailed craftsmanship, and distinctive motifs, which often draw inspiration from the country's rich flora and fauna.</p>
<h4 class="text-xl font-bold mt-6 mb-2">The Meticulous Process</h4>
<p class="mb-4">There are two primary techniques for creating Malaysian batik: 'batik tulis' (hand-drawn batik) and 'batik cap' (block-printed batik). 'Batik tulis' is the more traditional and labor-intensive method. An artist uses a small, pen-like copper tool called a 'canting' to apply hot liquid wax directly onto the fabric. The wax acts as a resist, preventing the dye from penetrating the covered areas. The fabric is then dyed, and the process of waxing and dyeing can be repeated multiple times to create complex, multi-layered designs with a rich palette of colors.</p>
<p class="mb-4">'Batik cap', on the other hand, uses a copper block or 'cap' that has been carved with a design. The block is dipped in hot wax and then stamped onto the fabric. This method is faster and allows for the creation of more uniform patterns, making it a popular choice for commercial production.</p>
<h4 class="text-xl font-bold mt-6 mb-2">From Tradition to Modern Art</h4>
<p>Originally used for sarongs and traditional garments, batik has evolved significantly over the years. Today, it is not only a cherished traditional craft but also a dynamic medium for contemporary artists and fashion designers. Malaysian batik can now be seen in everything from high fashion to home decor, showcasing its versatility and enduring appeal. The art of batik is a proud part of Malaysia's cultural heritage, a beautiful testament to the country's artistic soul.</p>"#,
        },
    ]
});

/// Looks up a site by id, if it is still in the catalogue.
pub fn site_by_id(id: SiteId) -> Option<&'static Site> {
    SITES.iter().find(|site| site.id == id)
}

/// Looks up a story by id.
pub fn story_by_id(id: StoryId) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_has_thirteen_sites_and_three_stories() {
        assert_eq!(SITES.len(), 13);
        assert_eq!(STORIES.len(), 3);
    }

    #[test]
    fn site_ids_are_unique() {
        let ids: HashSet<SiteId> = SITES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SITES.len());
    }

    #[test]
    fn every_declared_category_appears_in_the_catalogue() {
        for category in Category::ALL {
            assert!(
                SITES.iter().any(|s| s.category == category),
                "no site carries category {category}"
            );
        }
    }

    #[test]
    fn site_by_id_finds_retired_gaps_as_absent() {
        assert!(site_by_id(SiteId::new(1)).is_some());
        // ids 5, 8, 11, 13 were retired from the catalogue
        assert!(site_by_id(SiteId::new(5)).is_none());
        assert!(site_by_id(SiteId::new(13)).is_none());
    }

    #[test]
    fn story_by_id_finds_known_story() {
        let story = story_by_id(StoryId::new(2)).unwrap();
        assert_eq!(story.title, "Peranakan Heritage");
    }
}
