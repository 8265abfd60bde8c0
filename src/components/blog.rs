use yew::prelude::*;

struct Post {
    title: &'static str,
    excerpt: &'static str,
    author: &'static str,
    date: &'static str,
    read_time: &'static str,
    image: &'static str,
    category: &'static str,
}

const POSTS: [Post; 3] = [
    Post {
        title: "10 Interior Design Trends That Will Define 2024",
        excerpt: "Discover the latest trends in interior design that are shaping modern homes \
                  this year, from sustainable materials to bold color palettes.",
        author: "Sarah Martinez",
        date: "Dec 15, 2024",
        read_time: "5 min read",
        image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Trends",
    },
    Post {
        title: "Maximizing Small Spaces: Expert Tips and Tricks",
        excerpt: "Learn how to make the most of compact living areas with clever design \
                  solutions and space-saving techniques from our design experts.",
        author: "Michael Chen",
        date: "Dec 12, 2024",
        read_time: "7 min read",
        image: "https://images.pexels.com/photos/1571453/pexels-photo-1571453.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Tips",
    },
    Post {
        title: "The Psychology of Color in Interior Design",
        excerpt: "Understand how different colors affect mood and behavior, and learn to choose \
                  the perfect palette for each room in your home.",
        author: "Emma Davis",
        date: "Dec 10, 2024",
        read_time: "6 min read",
        image: "https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: "Psychology",
    },
];

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    html! {
        <section class="section section-dark">
            <style>
                {r#"
                    .blog-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .blog-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .blog-card {
                        background: #1C1C1C;
                        border-radius: 1rem;
                        overflow: hidden;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .blog-card:hover {
                        background: #2A2A2A;
                        transform: translateY(-5px);
                    }
                    .blog-card-image {
                        position: relative;
                        overflow: hidden;
                    }
                    .blog-card-image img {
                        width: 100%;
                        height: 13rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .blog-card:hover .blog-card-image img { transform: scale(1.1); }
                    .blog-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        background: #D4AF37;
                        color: #000;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }
                    .blog-card-body { padding: 1.5rem; }
                    .blog-card-body h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                        line-height: 1.4;
                    }
                    .blog-card-body > p {
                        color: #d1d5db;
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }
                    .blog-meta {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        color: #9ca3af;
                        font-size: 0.8rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"Design "}<span class="gold">{"Insights"}</span></h2>
                    <p>{"Stay updated with the latest trends, tips, and inspiration from our design experts"}</p>
                </div>

                <div class="blog-grid reveal">
                    { for POSTS.iter().map(|post| html! {
                        <article class="blog-card">
                            <div class="blog-card-image">
                                <img src={post.image} alt={post.title} />
                                <span class="blog-category">{ post.category }</span>
                            </div>
                            <div class="blog-card-body">
                                <h3>{ post.title }</h3>
                                <p>{ post.excerpt }</p>
                                <div class="blog-meta">
                                    <span>{ post.author }</span>
                                    <span>{ post.date }</span>
                                    <span>{ post.read_time }</span>
                                </div>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
