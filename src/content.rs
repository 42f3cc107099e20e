//! Static portfolio content
//!
//! Everything the section views display lives here as plain typed data,
//! so rendering code stays free of copy and the copy stays in one place.

/// Headline identity and landing copy.
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub badge: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub stats: &'static [Stat],
    pub socials: &'static [SocialLink],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct HighlightCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Certification {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub tech_stack: &'static [&'static str],
    pub description: &'static str,
    pub github: Option<&'static str>,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub status: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency from 0 to 100, rendered as a bar.
    pub level: u8,
}

pub const PROFILE: Profile = Profile {
    first_name: "Harsha",
    last_name: "Vardhan",
    badge: "Software Developer & Data Engineer",
    tagline: "Transforming Data Into Insights",
    summary: "Passionate about building scalable solutions and creating innovative \
              applications that drive business value through data engineering and \
              full-stack development.",
    email: "harshavardhanyempally302@gmail.com",
    stats: &[
        Stat { value: "8+", label: "Projects" },
        Stat { value: "4", label: "Tech Stacks" },
        Stat { value: "1+", label: "Years Experience" },
    ],
    socials: &[
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/harsha-vardhan-yempally",
        },
        SocialLink {
            label: "GitHub",
            url: "https://github.com/Harsha0o",
        },
        SocialLink {
            label: "Email",
            url: "mailto:harshavardhanyempally302@gmail.com",
        },
    ],
};

pub const ABOUT_HEADING: &str = "Compelling Portfolios That Leave A Lasting Impact";
pub const ABOUT_SUMMARY: &str = "Passionate about transforming data into insights and \
    building scalable solutions. With expertise in data engineering, cloud computing, \
    and full-stack development, I create innovative solutions that drive business value.";

pub const SERVICES: &[Service] = &[
    Service {
        title: "Website Development",
        description: "Building responsive and scalable web applications using modern \
                      technologies and best practices.",
    },
    Service {
        title: "Data Engineering",
        description: "Designing and implementing robust ETL pipelines and data \
                      warehousing solutions for analytics.",
    },
    Service {
        title: "Cloud Solutions",
        description: "Deploying and managing cloud infrastructure on GCP and AWS with \
                      focus on scalability.",
    },
];

pub const HIGHLIGHTS: &[HighlightCard] = &[
    HighlightCard {
        title: "Educational Background",
        body: "Bachelor's degree in Information Technology from TKR College of \
               Engineering and Technology, with a strong foundation in computer science \
               fundamentals, data structures, and software engineering principles.",
    },
    HighlightCard {
        title: "Current Role",
        body: "Data Engineer Intern at Kasmo Digital - Working on ETL pipelines, data \
               processing, and cloud-based solutions using modern data engineering tools \
               and practices.",
    },
    HighlightCard {
        title: "Career Goals",
        body: "Seeking roles in Data Science, Data Engineering, Development, and Cloud \
               Computing. Passionate about leveraging technology to solve complex \
               business problems and drive data-driven decision making.",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Google Cloud Platform – NPTEL Certified",
        description: "Comprehensive certification covering GCP services, cloud \
                      architecture, and best practices for cloud computing solutions.",
    },
    Certification {
        title: "Python for Data Science – NPTEL Certified",
        description: "Focused on Python fundamentals, data analysis using NumPy and \
                      Pandas, data visualization, and basic machine learning concepts.",
    },
    Certification {
        title: "Programming in Java – NPTEL Certified",
        description: "Comprehensive certification covering fundamental to advanced Java \
                      programming, including OOP, multithreading, and JDBC.",
    },
    Certification {
        title: "Technical Workshops",
        description: "Participated in various technical workshops focused on emerging \
                      technologies and software development methodologies.",
    },
];

pub const CORE_COMPETENCIES: &[&str] = &["Data Engineering", "Cloud Computing", "Machine Learning"];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ground Water Level Predictor",
        tech_stack: &["Python", "Flask", "Machine Learning", "SQL Server"],
        description: "Flask-based web application that predicts ground water levels \
                      using machine learning algorithms and historical data analysis.",
        github: Some("https://github.com/Harsha0o/Gwl-prediction"),
    },
    Project {
        title: "Gmail ETL Pipeline",
        tech_stack: &["Python", "ETL", "AWS S3", "SQL Server"],
        description: "Automated pipeline that extracts email metadata and attachments, \
                      processes the data, and loads it to SQL Server and AWS S3 for \
                      analytics.",
        github: Some("https://github.com/Harsha0o/ETL-PIPELINES/tree/master/Gmail"),
    },
    Project {
        title: "SharePoint ETL Project",
        tech_stack: &["SQL Server", "MongoDB", "AWS S3", "Python"],
        description: "Comprehensive ETL solution handling structured data (SQL Server), \
                      semi-structured data (MongoDB), and unstructured data (S3).",
        github: Some("https://github.com/Harsha0o/ETL-PIPELINES/tree/master/Sharepoint"),
    },
    Project {
        title: "BikeStores Advanced SQL Analysis",
        tech_stack: &["SQL Server", "Data Analysis", "Query Optimization"],
        description: "Complex SQL queries and database optimization project analyzing \
                      bike store operations, sales patterns, and performance metrics.",
        github: None,
    },
    Project {
        title: "SCD Type ETL Project",
        tech_stack: &["Python", "SQL", "ETL", "Data Warehousing"],
        description: "Full and incremental data loads implementing Slowly Changing \
                      Dimensions (SCD) Types 1, 2, and 4 using Python and SQL.",
        github: Some("https://github.com/Harsha0o/ETL-PIPELINES/tree/master/src"),
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Kasmo Digital",
        role: "Data Scientist",
        period: "Present",
        status: "Current Position",
        responsibilities: &[
            "Developing and deploying machine learning models to solve business problems",
            "Analyzing complex datasets to derive actionable insights and drive decision-making",
            "Collaborating with engineering teams to integrate data solutions into production systems",
            "Conducting A/B testing and statistical analysis to validate model performance",
            "Optimizing data pipelines for improved efficiency and scalability",
        ],
        technologies: &["Python", "Machine Learning", "Deep Learning", "SQL", "TensorFlow", "PyTorch"],
    },
    Experience {
        company: "Kasmo Digital",
        role: "Data Engineer Intern",
        period: "Previous",
        status: "Completed",
        responsibilities: &[
            "Developing and maintaining ETL pipelines using Python and SQL",
            "Working with Snowflake data warehouse for data processing and analytics",
            "Implementing data quality checks and validation processes",
            "Collaborating with cross-functional teams on data-driven solutions",
            "Optimizing database performance and query efficiency",
        ],
        technologies: &["Python", "SQL", "Snowflake", "ETL", "Data Warehousing"],
    },
    Experience {
        company: "Coder One",
        role: "Data Science Intern",
        period: "Previous",
        status: "Completed",
        responsibilities: &[
            "Conducted comprehensive data analysis on large datasets",
            "Developed machine learning models for predictive analytics",
            "Created data visualizations and reports for stakeholders",
            "Performed statistical analysis and hypothesis testing",
            "Collaborated on feature engineering and model optimization",
        ],
        technologies: &["Python", "Machine Learning", "Data Analysis", "Statistics", "Visualization"],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        skills: &[
            Skill { name: "Python", level: 90 },
            Skill { name: "JavaScript", level: 85 },
            Skill { name: "SQL", level: 88 },
            Skill { name: "Java", level: 75 },
        ],
    },
    SkillCategory {
        title: "Data Engineering & Analytics",
        skills: &[
            Skill { name: "Snowflake", level: 85 },
            Skill { name: "ETL Pipelines", level: 82 },
            Skill { name: "Apache Spark", level: 70 },
            Skill { name: "Data Warehousing", level: 78 },
        ],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        skills: &[
            Skill { name: "Google Cloud Platform", level: 88 },
            Skill { name: "AWS", level: 70 },
        ],
    },
    SkillCategory {
        title: "Web Development",
        skills: &[
            Skill { name: "React", level: 80 },
            Skill { name: "Node.js", level: 75 },
            Skill { name: "HTML/CSS", level: 85 },
            Skill { name: "Tailwind CSS", level: 80 },
        ],
    },
    SkillCategory {
        title: "Machine Learning",
        skills: &[
            Skill { name: "Scikit-learn", level: 75 },
            Skill { name: "Pandas", level: 85 },
            Skill { name: "NumPy", level: 80 },
            Skill { name: "TensorFlow", level: 65 },
        ],
    },
];

pub const TOOLS: &[&str] = &["Git", "VS Code", "Jupyter", "Postman", "Figma", "Linux"];

pub const FOOTER_TAGLINE: &str = "Turning caffeine into code, one commit at a time";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_experience_entries_have_details() {
        for entry in EXPERIENCE {
            assert!(!entry.responsibilities.is_empty(), "{}", entry.company);
            assert!(!entry.technologies.is_empty(), "{}", entry.company);
        }
    }
}
