//! Built-in content for the DESDR site.

use super::*;

pub static DESDR: Catalog = Catalog {
    site_title: "DESDR | Open Insurance Toolkit",
    hero: Hero {
        eyebrow: "DESDR",
        title: "Open Insurance Toolkit",
        description: "Traditional disaster risk management often relies on satellite data, which might not \
                      fully reflect the realities faced by vulnerable communities. DESDR (Decision Engine for \
                      Socioeconomic Disaster Risk) transforms this approach by integrating firsthand information \
                      from those most affected, enhancing accuracy and insight into disaster risks",
        image: Image { src: "/images/main.png", alt: "hero" },
        cta_label: "EXPLORE OUR TOOLKIT",
    },
    sponsors: SPONSORS,
    toolkit_title: "DESDR Toolkit",
    toolkit: TOOLKIT,
    banner: Banner {
        text: "DESDR will be released as open-source software, free for use by various organizations. This \
               initiative not only aims to improve disaster relief efforts but also empowers the most affected \
               communities by giving them a significant role in the solution-making process.",
        toolkit_label: "SEE THE TOOLKIT",
        repository_label: "VISIT OUR REPOSITORY",
        repository_url: "https://github.com/Columbia-DESDR",
    },
    investigators: INVESTIGATORS,
    members: MEMBERS,
    publications: PUBLICATIONS,
};

const fn sponsor(src: &'static str) -> SponsorAsset {
    SponsorAsset { image: Image { src, alt: "sponsor" } }
}

const SPONSORS: &[SponsorAsset] = &[
    sponsor("/images/logo-ccs.jpeg"),
    sponsor("/images/logo-cse.png"),
    sponsor("/images/logo-icrisat.png"),
    sponsor("/images/logo-iri.png"),
    sponsor("/images/logo-servir.png"),
    sponsor("/images/logo-usaid.png"),
];

const TOOLKIT: &[ToolkitEntry] = &[
    ToolkitEntry {
        name: "Survey Your Way",
        image: Some(Image { src: "/images/prod-ikon.png", alt: "product ikon" }),
        route: Page::SurveyYourWay,
        subtitle: "DATA COLLECTION",
        description: "First, we utilize mobile messaging platforms for accessible and respectful engagement and \
                      data collection from local communities",
        details: &[
            "iKON is an innovative app designed to collect essential climate-risk data from farmers across the \
             globe. By employing gamification and behavioral design, iKON motivates farmers to provide precise \
             historical climate data. The app enhances data gathering by comparing data across different years \
             and rewarding accuracy, which helps compile a detailed climate history based on collective insights.",
            "Accessible through WhatsApp, iKON connects seamlessly with any farmer owning a smartphone. This easy \
             access allows iKON to collect vital data efficiently, contributing significantly to improving tools \
             for climate risk management, such as index insurance.",
        ],
        deployed: &[
            DeploymentLink { label: "Noki", url: "https://fist-noki.iri.columbia.edu/login" },
            DeploymentLink { label: "iKON", url: "https://fist-ikonadmin.iri.columbia.edu/login?next=%2Fadmin" },
        ],
    },
    ToolkitEntry {
        name: "Reptile",
        image: Some(Image { src: "/images/prod-reptile.png", alt: "product reptile" }),
        route: Page::Reptile,
        subtitle: "DATA VERIFICATION",
        description: "Then, we ensure data accuracy and security using this tool",
        details: &["A software tool designed to clean up survey records. Focuses on fixing data errors reported by users"],
        deployed: &[
            DeploymentLink { label: "Ethiopia", url: "https://fist-cleandat.iri.columbia.edu/com" },
            DeploymentLink { label: "Zambia", url: "https://fist-cleandat.iri.columbia.edu/comzambia" },
            DeploymentLink { label: "Congo", url: "http://ec2-18-117-152-17.us-east-2.compute.amazonaws.com/" },
        ],
    },
    ToolkitEntry {
        name: "Sliders",
        image: Some(Image { src: "/images/prod-slider.png", alt: "product slider" }),
        route: Page::Sliders,
        subtitle: "DATA VISUALIZATION",
        description: "Now finally, though this web platform, policy makers can access and utilize data to make \
                      informed decisions",
        details: &["Website for analysis of data by stakeholders like government officials, researchers, and \
                    policy makers (for creating insurance programs)"],
        deployed: &[
            DeploymentLink { label: "Senegal", url: "https://columbia-desdr.github.io/Sliders-senegal/config" },
            DeploymentLink { label: "Ethiopia", url: "https://columbia-desdr.github.io/Sliders-ethiopia/config" },
            DeploymentLink { label: "Zambia", url: "https://columbia-desdr.github.io/Sliders-zambia/" },
            DeploymentLink { label: "Nigeria", url: "https://columbia-desdr.github.io/Sliders-nigeria/config" },
            DeploymentLink { label: "Congo", url: "https://columbia-desdr.github.io/Sliders-drc/Two%20Column" },
            DeploymentLink { label: "Bangladesh", url: "https://columbia-desdr.github.io/Sliders-bangladesh/config" },
            DeploymentLink { label: "Mozambique", url: "https://columbia-desdr.github.io/Sliders-mozambique/config" },
            DeploymentLink { label: "Rwanda", url: "https://columbia-desdr.github.io/Sliders-rwanda/config" },
        ],
    },
];

const INVESTIGATORS: &[PersonEntry] = &[
    PersonEntry {
        name: "Daniel Osgood",
        image: Image { src: "/images/daniel.png", alt: "Daniel Osgood" },
        affiliation: "IRI, Columbia University",
        link: "https://iri.columbia.edu/contact/staff-directory/daniel-osgood/",
    },
    PersonEntry {
        name: "Eugene Wu",
        image: Image { src: "/images/wu.png", alt: "Eugene Wu" },
        affiliation: "CS, Columbia University",
        link: "https://www.cs.columbia.edu/~ewu/",
    },
    PersonEntry {
        name: "Lydia Chilton",
        image: Image { src: "/images/lydia.png", alt: "Lydia Chilton" },
        affiliation: "CS, Columbia University",
        link: "https://www.cs.columbia.edu/~chilton/chilton.html",
    },
];

const MEMBERS: &[TeamMemberName] = &[
    TeamMemberName("Dieter Joubert"),
    TeamMemberName("Ritika Ganesh Deshpande"),
    TeamMemberName("Tanisha Bisht"),
    TeamMemberName("Miranda Zhou"),
    TeamMemberName("Aaron Zhu"),
    TeamMemberName("Amina Isayeva"),
    TeamMemberName("Kshitij D Gupta"),
    TeamMemberName("Ajit Sharma Kasturi"),
    TeamMemberName("Phoebe Adams"),
    TeamMemberName("Emnet Tsegaye"),
    TeamMemberName("Azam Khan"),
    TeamMemberName("Jasper Sands"),
    TeamMemberName("Lilita Yenew"),
    TeamMemberName("Jongho Bae"),
    TeamMemberName("Kenny Frias"),
    TeamMemberName("Justine Pui Ying Mach"),
];

const fn publication(title: &'static str, authors: &'static str, link: &'static str) -> Publication {
    Publication { title, authors: Some(authors), link: Some(link) }
}

const PUBLICATIONS: &[Publication] = &[
    publication(
        "In New Project, Millions of Farmers Will Help to Improve Insurance Against Climate Disasters",
        "Columbia Climate School Newsletter — 2021",
        "https://iri.columbia.edu/news/in-new-project-millions-of-farmers-will-help-to-improve-insurance-against-climate-disasters/",
    ),
    publication(
        "iKON: Playing to Adapt",
        "Columbia Climate School Newsletter — 2021",
        "https://iri.columbia.edu/news/ikon-playing-to-adapt/",
    ),
    publication(
        "PI2: End-to-end Interactive Visualization Interface Generation from Queries",
        "Yiru Chen, Eugene Wu",
        "https://arxiv.org/abs/2107.08203",
    ),
    publication(
        "View Composition Algebra for Ad Hoc Comparisons",
        "Eugene Wu — TVCG 2022",
        "https://arxiv.org/abs/2202.07836",
    ),
    publication(
        "Playing to Adapt: Crowdsourcing Historical Climate Data with Gamification to Improve Farmer Risk \
         Management Instruments",
        "Juan Nicolas Aguilera, Max Mauerman, Daniel Osgood",
        "https://papers.ssrn.com/sol3/papers.cfm?abstract_id=3639580",
    ),
    publication(
        "Reptile: Aggregation-level Explanations for Hierarchical Data",
        "Zachary Huang, Eugene Wu — SIGMOD 2022",
        "https://arxiv.org/abs/2103.07037",
    ),
    publication(
        "Using Tech to Help African Farmers Collect Index Insurance Payouts",
        "News Article — Aug 2022",
        "https://www.engineering.columbia.edu/news/using-tech-help-african-farmers-collect-payouts",
    ),
    publication(
        "NL2INTERFACE: Interactive Visualization Interface Generation from Natural Language Queries",
        "Yiru Chen, Ryan Li, Austin Mac, Tianbao Xie, Tao Yu, Eugene Wu — VIS NLVis Workshop 2022",
        "https://arxiv.org/abs/2209.08834",
    ),
    publication(
        "Voices of CS: Zachary Huang",
        "Columbia CS Newsletter — 2022",
        "https://www.cs.columbia.edu/2022/voices-of-cs-zachary-huang/",
    ),
    publication(
        "Demonstration of PI2: Interactive Visualization Interface Generation for SQL Analysis in Notebook",
        "Jeffrey Tao, Yiru Chen, Eugene Wu",
        "https://doi.org/10.1145/3514221.3520153",
    ),
    publication(
        "DIG: The Data Interface Grammar",
        "Yiru Chen, Jeffrey Tao, Eugene Wu — HILDA @ SIGMOD 2023",
        "https://www.dropbox.com/s/bhwikxq8932dsg5/dig-hilda23-cr.pdf?dl=0",
    ),
    publication(
        "Design-Specific Transformations in Visualization",
        "Eugene Wu, Remco Chang — BELIV @ IEEE VIS 2024",
        "https://arxiv.org/abs/2407.06404",
    ),
    publication(
        "LEAP Summer Lecture in Climate Data Science webinar featuring Dr. Joshua DeVincenzo, where he discussed \
         \"Climate, Mental Models, and Data for Disaster Preparedness\"",
        "Joshua DeVincenzo — LEAP Summer Lecture — July 2024",
        "https://www.eventbrite.com/e/leap-summer-2024-lecture-in-climate-data-science-joshua-devincenzo-tickets-755889344377",
    ),
    publication(
        "Database Theory in Action: Database Visualization",
        "Eugene Wu — ICDT Database Theory in Action 2025",
        "https://drops.dagstuhl.de/storage/00lipics/lipics-vol328-icdt2025/LIPIcs.ICDT.2025.35/LIPIcs.ICDT.2025.35.pdf",
    ),
    Publication {
        title: "Insurance for Climate Change in the Global South",
        authors: Some("Daniel Osgood — Class — Spring 2025"),
        link: None,
    },
    publication(
        "What questions need to be asked for monitoring and evaluation of agricultural insurance to assist \
         smallholder farmers and humanitarian funds?",
        "SIPA Class — Spring 2025",
        "https://www.sipa.columbia.edu/what-questions-need-be-asked-monitoring-and-evaluation-agricultural-insurance-assist-smallholder",
    ),
    publication(
        "Aggregation Consistency Errors in Semantic Layers and How to Avoid Them",
        "Zezhou Huang, Pavan Kalyan Damalapati, Eugene Wu",
        "https://dl.acm.org/doi/10.1145/3597465.3605224",
    ),
    publication(
        "Can generative AI help strengthen disaster preparedness and resilience among youth?",
        "State of the Planet Blog — Dec 2025",
        "https://news.climate.columbia.edu/2025/12/16/proposing-a-genai-chatbot-framework-for-youth-disaster-risk-reduction/",
    ),
    publication(
        "2025 was one of the three hottest years on record, scientists say",
        "Andrew Kruczkiewicz — AP News — Dec 2025",
        "https://apnews.com/article/climate-world-weather-attribution-year-end-extreme-1e9028da87e518382482e21fef3cfeee",
    ),
    publication(
        "It's been one year since wildfires devastated Los Angeles. What have we learned?",
        "Jeff Schlegelmilch — State of the Planet Blog — Jan 2026",
        "https://news.climate.columbia.edu/2026/01/12/its-been-one-year-since-wildfires-devastated-los-angeles-what-have-we-learned/",
    ),
    Publication {
        title: "Imagining Anticipatory Action",
        authors: Some("NCDP — World Food Programme Exercise — Jan 27, 2026"),
        link: None,
    },
    publication(
        "Field testing with farmers in the coffee regions of Colombia",
        "Yale Center for Geospatial Solutions, Yale School of the Environment — Featured Video — Jan 2026",
        "https://ncdp.columbia.edu/video-media-items/field-testing-the-ikon-game-in-colombia/",
    ),
    publication(
        "Capacity Building with the Ethiopian Meteorological Institute",
        "NCDP — NCDP Perspectives Blog — Jan 2026",
        "https://ncdp.columbia.edu/ncdp-perspectives/capacity-building-with-the-ethiopian-meteorological-institute/",
    ),
    publication(
        "Community Participation and Planning Guides for Local Climate Action",
        "NCDP — Strengthening Capacities and Civic Participation for Climate-Resilient Communities in Chile — Jan 2026",
        "https://academiccommons.columbia.edu/doi/10.7916/vsms-hm95",
    ),
    publication(
        "Context-Aware Climate Intelligence: Integrating Community Data into AI Disaster Models",
        "Justine Mach, Kenny Frias",
        "https://docs.google.com/presentation/d/1I2cEKmiWuY7YXb3qqvKoSku3tUseWDVscvjdbWMvv2g/edit?usp=sharing",
    ),
];
