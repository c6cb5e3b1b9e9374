//! The canned discovery-call script: five sections, ten questions, each
//! with a "listen for" note for the caller.

#[derive(Debug, Clone, Copy)]
pub struct ScriptSection {
    pub title: &'static str,
    pub questions: &'static [ScriptQuestion],
}

#[derive(Debug, Clone, Copy)]
pub struct ScriptQuestion {
    pub number: u8,
    pub prompt: &'static str,
    pub listen_for: &'static str,
}

pub const DISCOVERY_SCRIPT: &[ScriptSection] = &[
    ScriptSection {
        title: "Opening",
        questions: &[ScriptQuestion {
            number: 1,
            prompt: "Thanks for jumping on the call. Before we dive in, can you give me a quick overview of what your team does and your main focus right now?",
            listen_for: "Team size, service offerings, current priorities",
        }],
    },
    ScriptSection {
        title: "Pain Point Identification",
        questions: &[
            ScriptQuestion {
                number: 2,
                prompt: "When it comes to customer service or support, what's the biggest headache your team faces right now? Walk me through a typical day.",
                listen_for: "Volume, repetitive tasks, time spent, cost impact",
            },
            ScriptQuestion {
                number: 3,
                prompt: "How much time would you say your team spends on manual, repetitive tasks each week? Can you give me specific examples?",
                listen_for: "Hours spent, specific processes, team members involved",
            },
            ScriptQuestion {
                number: 4,
                prompt: "What's that costing you? Are we talking lost productivity, delayed client responses, or something else?",
                listen_for: "Dollar impact, opportunity cost, client satisfaction issues",
            },
        ],
    },
    ScriptSection {
        title: "Current Solutions",
        questions: &[
            ScriptQuestion {
                number: 5,
                prompt: "Are you currently using any tools or software to handle this? How's that working out?",
                listen_for: "Current tech stack, gaps, frustrations, integration issues",
            },
            ScriptQuestion {
                number: 6,
                prompt: "What would the ideal solution look like for you? What would it need to do?",
                listen_for: "Specific features needed, integration requirements, outcomes",
            },
        ],
    },
    ScriptSection {
        title: "Implementation & Budget",
        questions: &[
            ScriptQuestion {
                number: 7,
                prompt: "How soon would you want to implement something like this? Are we talking weeks, months?",
                listen_for: "Timeline urgency, decision-making process, dependencies",
            },
            ScriptQuestion {
                number: 8,
                prompt: "Roughly, what kind of budget are you working with for a solution like this?",
                listen_for: "Budget range, flexibility, approval process",
            },
            ScriptQuestion {
                number: 9,
                prompt: "Who else needs to be involved in this decision? Are there other stakeholders I should be talking to?",
                listen_for: "Decision-makers, influencers, approval chain",
            },
        ],
    },
    ScriptSection {
        title: "Closing",
        questions: &[ScriptQuestion {
            number: 10,
            prompt: "Based on what you've shared, I think we could potentially save your team 10-15 hours per week. Does that sound valuable? If we put together a tailored proposal, would you be interested in reviewing it?",
            listen_for: "Interest level, next steps, objections",
        }],
    },
];

pub const KEY_PRINCIPLES: &[&str] = &[
    "Let them talk 70% of the time—listen actively",
    "Translate pain points into specific outcomes they care about",
    "Always confirm understanding: \"So what I'm hearing is...\"",
    "End with a clear next step: proposal delivery and review timeline",
    "Take detailed notes for your proposal",
];
