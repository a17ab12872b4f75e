//! Modern Tech theme
//!
//! Dark developer-focused monospace layout. The display name renders as a
//! self-closing tag and experience runs down a bordered timeline.

use crate::document::{Node, NodeKey};
use crate::profile::Profile;
use crate::render::helpers::{paragraph_if, span_if};

pub(crate) fn render(p: &Profile) -> Node {
    Node::block("bg-slate-900 text-slate-300 min-h-full p-8 font-mono").child(
        Node::block(
            "max-w-5xl mx-auto border border-slate-700 bg-slate-800/50 rounded-lg overflow-hidden shadow-2xl",
        )
        .child(header(p))
        .child(
            Node::block("grid grid-cols-1 lg:grid-cols-3")
                .child(sidebar(p))
                .child(main_column(p)),
        ),
    )
}

fn header(p: &Profile) -> Node {
    let mut header = Node::block("p-8 border-b border-slate-700 bg-slate-800");
    if !p.full_name.is_empty() {
        header = header.child(Node::heading(
            1,
            "text-4xl md:text-5xl font-bold text-teal-400 mb-2 tracking-tighter",
            format!("<{} />", p.full_name),
        ));
    }
    header
        .maybe(paragraph_if("text-xl text-slate-400 mb-6 font-light", &p.title))
        .child(
            Node::block("flex flex-wrap gap-4 text-sm text-slate-400")
                .maybe(span_if("flex items-center hover:text-teal-300 transition-colors", &p.email))
                .maybe(span_if(
                    "flex items-center hover:text-teal-300 transition-colors",
                    &p.location,
                ))
                .maybe(span_if(
                    "flex items-center hover:text-teal-300 transition-colors",
                    &p.linkedin,
                ))
                .maybe(span_if(
                    "flex items-center hover:text-teal-300 transition-colors",
                    &p.github,
                )),
        )
}

fn sidebar(p: &Profile) -> Node {
    let skills = p.skills.iter().enumerate().map(|(i, skill)| {
        Node::span(
            "px-2 py-1 bg-slate-700 text-teal-300 text-xs rounded border border-slate-600",
            skill,
        )
        .key(NodeKey::Index(i))
    });

    Node::block("p-8 border-r border-slate-700 space-y-8 bg-slate-800/30")
        .child(
            Node::section("")
                .child(Node::heading(
                    3,
                    "text-teal-400 font-bold uppercase tracking-widest mb-4 text-sm",
                    "About",
                ))
                .maybe(paragraph_if("text-slate-400 leading-relaxed text-sm", &p.bio)),
        )
        .child(
            Node::section("")
                .child(Node::heading(
                    3,
                    "text-teal-400 font-bold uppercase tracking-widest mb-4 text-sm",
                    "Tech Stack",
                ))
                .child(Node::block("flex flex-wrap gap-2").extend(skills)),
        )
}

fn main_column(p: &Profile) -> Node {
    let experience = p.experience.iter().map(|exp| {
        Node::block("relative")
            .key(NodeKey::Entry(exp.id.0))
            .child(Node::block(
                "absolute -left-[37px] top-1 w-4 h-4 rounded-full bg-slate-900 border-2 border-teal-500",
            ))
            .maybe(if exp.role.is_empty() {
                None
            } else {
                Some(Node::heading(4, "text-xl font-bold text-slate-200", &exp.role))
            })
            .child(
                Node::block("flex justify-between items-center mb-2")
                    .maybe(span_if("text-teal-400 font-medium", &exp.company))
                    .maybe(span_if(
                        "text-xs text-slate-500 bg-slate-800 px-2 py-1 rounded",
                        &exp.duration,
                    )),
            )
            .maybe(paragraph_if(
                "text-slate-400 text-sm leading-relaxed",
                &exp.description,
            ))
    });

    let projects = p.projects.iter().map(|proj| {
        let tags = proj.tags.iter().enumerate().map(|(i, tag)| {
            Node::span("text-xs text-slate-500", format!("#{tag}")).key(NodeKey::Index(i))
        });
        Node::block(
            "bg-slate-800 p-5 rounded border border-slate-700 hover:border-teal-500/50 transition-colors group",
        )
        .key(NodeKey::Entry(proj.id.0))
        .maybe(if proj.name.is_empty() {
            None
        } else {
            Some(Node::heading(
                4,
                "text-lg font-bold text-slate-200 group-hover:text-teal-400 transition-colors",
                &proj.name,
            ))
        })
        .maybe(paragraph_if("text-slate-400 text-sm mb-4", &proj.description))
        .child(Node::block("flex flex-wrap gap-2").extend(tags))
    });

    Node::block("lg:col-span-2 p-8 space-y-10")
        .child(
            Node::section("")
                .child(
                    Node::block("flex items-center mb-6")
                        .child(Node::heading(3, "text-2xl font-bold text-slate-100 mr-4", "Experience"))
                        .child(Node::block("h-px bg-slate-700 flex-grow")),
                )
                .child(
                    Node::block("space-y-8 border-l border-slate-700 ml-3 pl-8 relative")
                        .extend(experience),
                ),
        )
        .child(
            Node::section("")
                .child(
                    Node::block("flex items-center mb-6")
                        .child(Node::heading(3, "text-2xl font-bold text-slate-100 mr-4", "Projects"))
                        .child(Node::block("h-px bg-slate-700 flex-grow")),
                )
                .child(Node::block("grid grid-cols-1 gap-6").extend(projects)),
        )
}
