//! Default data for each component type.

use serde_json::{Value, json};

use crate::data::Data;

fn object(value: Value) -> Data {
    match value {
        Value::Object(map) => map,
        _ => Data::new(),
    }
}

pub fn hero() -> Data {
    object(json!({
        "title": "Welcome to Your Website",
        "subtitle": "Build amazing things with drag and drop",
        "buttonText": "Get Started",
        "buttonUrl": "#",
        "background": "#f5f5f5",
        "backgroundType": "solid",
        "gradientStart": "#667eea",
        "gradientEnd": "#764ba2",
        "textAlign": "center",
        "minHeight": "400px",
        "textColor": "#1a1a1a",
        "buttonColor": "#0066cc",
        "buttonTextColor": "#ffffff"
    }))
}

pub fn text() -> Data {
    object(json!({
        "heading": "About Us",
        "content": "Tell your story here. Add your content and customize it to match your brand.",
        "headingSize": "2rem",
        "textAlign": "left",
        "backgroundColor": "#ffffff"
    }))
}

pub fn image() -> Data {
    object(json!({
        "src": "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800",
        "alt": "Featured Image",
        "width": "100%",
        "maxWidth": "1000px",
        "borderRadius": "1rem",
        "alignment": "center"
    }))
}

pub fn features() -> Data {
    object(json!({
        "heading": "Our Features",
        "backgroundColor": "#f8fafc",
        "features": [
            { "icon": "⚡", "title": "Fast", "description": "Lightning quick performance" },
            { "icon": "🔒", "title": "Secure", "description": "Your data is safe" },
            { "icon": "📱", "title": "Responsive", "description": "Works on all devices" }
        ]
    }))
}

pub fn cta() -> Data {
    object(json!({
        "heading": "Ready to Get Started?",
        "subtitle": "Join thousands of users today",
        "buttonText": "Sign Up Now",
        "buttonUrl": "#",
        "backgroundType": "gradient",
        "backgroundColor": "#0066cc",
        "gradientStart": "#0066cc",
        "gradientEnd": "#00a8ff",
        "textColor": "#ffffff",
        "buttonColor": "#ffffff",
        "buttonTextColor": "#0066cc"
    }))
}

pub fn gallery() -> Data {
    object(json!({
        "images": [
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400",
            "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400",
            "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=400",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400"
        ],
        "columns": "auto-fit",
        "gap": "1rem",
        "imageHeight": "250px"
    }))
}

pub fn team() -> Data {
    object(json!({
        "heading": "Meet Our Team",
        "members": [
            {
                "name": "John Doe",
                "role": "CEO & Founder",
                "image": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400",
                "bio": "Leading the company vision"
            },
            {
                "name": "Jane Smith",
                "role": "CTO",
                "image": "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400",
                "bio": "Technology expert"
            },
            {
                "name": "Mike Johnson",
                "role": "Designer",
                "image": "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400",
                "bio": "Creative director"
            }
        ]
    }))
}

pub fn stats() -> Data {
    object(json!({
        "backgroundColor": "#f8fafc",
        "stats": [
            { "number": "10K+", "label": "Happy Customers" },
            { "number": "50+", "label": "Team Members" },
            { "number": "99%", "label": "Satisfaction Rate" },
            { "number": "24/7", "label": "Support" }
        ]
    }))
}

pub fn faq() -> Data {
    object(json!({
        "heading": "Frequently Asked Questions",
        "faqs": [
            {
                "question": "How does it work?",
                "answer": "Our platform is easy to use and intuitive. Simply sign up and start building."
            },
            {
                "question": "What are the pricing plans?",
                "answer": "We offer flexible pricing plans to suit every need and budget."
            },
            {
                "question": "Is there a free trial?",
                "answer": "Yes! We offer a 14-day free trial with no credit card required."
            }
        ]
    }))
}

pub fn contact() -> Data {
    object(json!({
        "heading": "Get In Touch",
        "subtitle": "We'd love to hear from you",
        "backgroundColor": "#ffffff"
    }))
}

pub fn newsletter() -> Data {
    object(json!({
        "heading": "Subscribe to Our Newsletter",
        "subtitle": "Get the latest updates and news",
        "buttonText": "Subscribe",
        "backgroundType": "gradient",
        "gradientStart": "#667eea",
        "gradientEnd": "#764ba2"
    }))
}

pub fn logos() -> Data {
    object(json!({
        "heading": "Trusted By Leading Companies",
        "logos": [
            "https://via.placeholder.com/150x60?text=Company+1",
            "https://via.placeholder.com/150x60?text=Company+2",
            "https://via.placeholder.com/150x60?text=Company+3",
            "https://via.placeholder.com/150x60?text=Company+4"
        ]
    }))
}

pub fn timeline() -> Data {
    object(json!({
        "heading": "Our Journey",
        "events": [
            { "year": "2020", "title": "Company Founded", "description": "Started our journey" },
            { "year": "2021", "title": "First Product", "description": "Launched our flagship product" },
            { "year": "2022", "title": "10K Users", "description": "Reached major milestone" },
            { "year": "2023", "title": "Global Expansion", "description": "Expanded to 50 countries" }
        ]
    }))
}

pub fn video() -> Data {
    object(json!({
        "url": "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "title": "Watch Our Video",
        "aspectRatio": "16/9",
        "maxWidth": "800px"
    }))
}

pub fn footer() -> Data {
    object(json!({
        "companyName": "Your Company",
        "tagline": "Building amazing products",
        "columns": [
            { "title": "Product", "links": ["Features", "Pricing", "Security"] },
            { "title": "Company", "links": ["About", "Blog", "Careers"] },
            { "title": "Support", "links": ["Help Center", "Contact", "Status"] }
        ],
        "copyright": "© 2025 Your Company. All rights reserved."
    }))
}

pub fn navbar() -> Data {
    object(json!({
        "brand": "Your Brand",
        "links": ["Home", "About", "Services", "Contact"],
        "ctaText": "Get Started",
        "ctaUrl": "#",
        "backgroundColor": "#ffffff",
        "sticky": true
    }))
}

pub fn blog() -> Data {
    object(json!({
        "heading": "Latest Articles",
        "posts": [
            {
                "image": "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=400",
                "title": "Getting Started with Web Development",
                "excerpt": "Learn the basics of modern web development and build your first website.",
                "date": "Jan 15, 2025",
                "readTime": "5 min read",
                "link": "#"
            },
            {
                "image": "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400",
                "title": "Design Tips for Beginners",
                "excerpt": "Master the fundamentals of good design with these simple tips.",
                "date": "Jan 10, 2025",
                "readTime": "4 min read",
                "link": "#"
            },
            {
                "image": "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=400",
                "title": "Building Responsive Layouts",
                "excerpt": "Create websites that look great on any device with responsive design.",
                "date": "Jan 5, 2025",
                "readTime": "6 min read",
                "link": "#"
            }
        ]
    }))
}

pub fn imagetext() -> Data {
    object(json!({
        "image": "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=600",
        "heading": "Our Story",
        "text": "We are passionate about creating amazing experiences. Our team works tirelessly to deliver the best products and services to our customers.",
        "buttonText": "Learn More",
        "buttonUrl": "#",
        "imagePosition": "left",
        "backgroundColor": "#ffffff",
        "textColor": "#1a1a1a",
        "buttonColor": "#0066cc",
        "buttonTextColor": "#ffffff"
    }))
}

pub fn callout() -> Data {
    object(json!({
        "icon": "💡",
        "heading": "Pro Tip",
        "text": "This is important information that you should pay attention to. Use callouts to highlight key points.",
        "backgroundColor": "#fef3c7",
        "borderColor": "#f59e0b"
    }))
}

pub fn progress() -> Data {
    object(json!({
        "heading": "Our Skills",
        "skills": [
            { "name": "Web Development", "percentage": 90 },
            { "name": "UI/UX Design", "percentage": 85 },
            { "name": "Marketing", "percentage": 75 },
            { "name": "Project Management", "percentage": 80 }
        ]
    }))
}

pub fn social() -> Data {
    object(json!({
        "heading": "Follow Us",
        "links": [
            { "platform": "Facebook", "url": "https://facebook.com", "icon": "f" },
            { "platform": "Twitter", "url": "https://twitter.com", "icon": "𝕏" },
            { "platform": "Instagram", "url": "https://instagram.com", "icon": "📷" },
            { "platform": "LinkedIn", "url": "https://linkedin.com", "icon": "in" },
            { "platform": "YouTube", "url": "https://youtube.com", "icon": "▶" }
        ]
    }))
}

pub fn map() -> Data {
    object(json!({
        "heading": "Visit Us",
        "address": "123 Main Street, City, State 12345",
        "embedUrl": "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3024.2219901290355!2d-74.00369368400567!3d40.71312937933185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c25a23e28c1191%3A0x49f75d3281df052a!2sBroadway%2C%20New%20York%2C%20NY%2C%20USA!5e0!3m2!1sen!2s!4v1234567890"
    }))
}

pub fn testimonials() -> Data {
    object(json!({
        "heading": "What Our Customers Say",
        "testimonials": [
            {
                "rating": 5,
                "text": "Absolutely amazing service! Highly recommend.",
                "name": "Sarah Johnson",
                "role": "CEO, TechCorp"
            },
            {
                "rating": 5,
                "text": "Great experience from start to finish.",
                "name": "Mike Davis",
                "role": "Founder, StartupXYZ"
            },
            {
                "rating": 5,
                "text": "Professional and reliable. Will use again!",
                "name": "Emily Chen",
                "role": "Marketing Director"
            }
        ]
    }))
}

pub fn pricing() -> Data {
    object(json!({
        "heading": "Choose Your Plan",
        "plans": [
            {
                "name": "Basic",
                "price": "9",
                "features": ["Feature 1", "Feature 2", "Feature 3"],
                "buttonText": "Get Started",
                "buttonUrl": "#"
            },
            {
                "name": "Pro",
                "price": "29",
                "features": ["All Basic features", "Feature 4", "Feature 5", "Priority Support"],
                "buttonText": "Get Started",
                "buttonUrl": "#"
            },
            {
                "name": "Enterprise",
                "price": "99",
                "features": ["All Pro features", "Custom integrations", "Dedicated support", "SLA"],
                "buttonText": "Contact Us",
                "buttonUrl": "#"
            }
        ]
    }))
}

pub fn accordion() -> Data {
    object(json!({
        "heading": "Frequently Asked Questions",
        "items": [
            {
                "title": "What is your return policy?",
                "content": "We offer a 30-day money-back guarantee on all purchases."
            },
            {
                "title": "How long does shipping take?",
                "content": "Standard shipping takes 5-7 business days. Express shipping is 2-3 days."
            },
            {
                "title": "Do you ship internationally?",
                "content": "Yes, we ship to over 100 countries worldwide."
            }
        ]
    }))
}

pub fn tabs() -> Data {
    object(json!({
        "tabs": [
            { "title": "Features", "content": "Discover all the amazing features our product offers." },
            { "title": "Pricing", "content": "Simple and transparent pricing for everyone." },
            { "title": "Support", "content": "Get help when you need it with our 24/7 support team." }
        ]
    }))
}

pub fn cards() -> Data {
    object(json!({
        "heading": "Our Services",
        "cards": [
            { "icon": "🎨", "title": "Design", "description": "Beautiful, modern designs that convert." },
            { "icon": "💻", "title": "Development", "description": "Clean, scalable code built to last." },
            { "icon": "🚀", "title": "Marketing", "description": "Strategies that drive real results." }
        ]
    }))
}

pub fn countdown() -> Data {
    object(json!({
        "heading": "Product Launch",
        "subtitle": "Coming Soon",
        "targetDate": "2025-12-31",
        "targetTime": "23:59:59",
        "backgroundColor": "#667eea",
        "textColor": "#ffffff"
    }))
}

pub fn quote() -> Data {
    object(json!({
        "quote": "The best way to predict the future is to create it.",
        "author": "Peter Drucker",
        "backgroundColor": "#f8fafc",
        "quoteSize": "2rem"
    }))
}

pub fn steps() -> Data {
    object(json!({
        "heading": "How It Works",
        "steps": [
            { "number": "1", "title": "Sign Up", "description": "Create your free account in seconds" },
            { "number": "2", "title": "Customize", "description": "Choose your design and settings" },
            { "number": "3", "title": "Launch", "description": "Go live with your new website" }
        ]
    }))
}

pub fn banner() -> Data {
    object(json!({
        "text": "Special Offer: Get 50% off for a limited time!",
        "buttonText": "Learn More",
        "buttonUrl": "#",
        "backgroundColor": "#0066cc",
        "textColor": "#ffffff",
        "dismissible": true
    }))
}

pub fn metrics() -> Data {
    object(json!({
        "metrics": [
            { "number": "99%", "label": "Customer Satisfaction", "icon": "😊" },
            { "number": "10K+", "label": "Active Users", "icon": "👥" },
            { "number": "50M+", "label": "Downloads", "icon": "📥" },
            { "number": "24/7", "label": "Support", "icon": "🛟" }
        ],
        "backgroundColor": "#ffffff"
    }))
}

pub fn portfolio() -> Data {
    object(json!({
        "heading": "Our Work",
        "projects": [
            {
                "image": "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500",
                "title": "Project Alpha",
                "category": "Web Design"
            },
            {
                "image": "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=500",
                "title": "Project Beta",
                "category": "Branding"
            },
            {
                "image": "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500",
                "title": "Project Gamma",
                "category": "Development"
            },
            {
                "image": "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=500",
                "title": "Project Delta",
                "category": "Marketing"
            }
        ]
    }))
}

pub fn columns() -> Data {
    object(json!({
        "columnCount": 2,
        "columns": [
            { "content": "This is the first column content. You can add any text here." },
            { "content": "This is the second column content. Great for side-by-side comparisons." }
        ],
        "backgroundColor": "#ffffff"
    }))
}

pub fn separator() -> Data {
    object(json!({
        "style": "solid",
        "width": "50%",
        "color": "#e2e8f0",
        "thickness": "2px",
        "spacing": "3rem"
    }))
}

pub fn graph() -> Data {
    object(json!({
        "heading": "Sales Performance",
        "chartType": "bar",
        "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        "datasets": [
            {
                "label": "Sales 2024",
                "data": [65, 59, 80, 81, 56, 55],
                "color": "#0066cc"
            },
            {
                "label": "Sales 2023",
                "data": [45, 49, 60, 71, 46, 45],
                "color": "#764ba2"
            }
        ],
        "showLegend": true,
        "height": "400px"
    }))
}
