//! The Personal Budget Tracker layout and the banner printed around it.
//!
//! Everything here is static data. Entries keep the order they are written in,
//! which is also the order they are printed in.

use super::entities::{Entry, StructureNode};

/// Builds a `&'static [Entry]` from `"name" => file` and `"name" => { ... }` items.
macro_rules! layout {
    (@entry $name:literal => file) => {
        Entry {
            name: $name,
            node: StructureNode::File,
        }
    };
    (@entry $name:literal => { $($inner:tt)* }) => {
        Entry {
            name: $name,
            node: StructureNode::Directory {
                children: layout!($($inner)*),
            },
        }
    };
    ($($name:literal => $node:tt),* $(,)?) => {
        &[$(layout!(@entry $name => $node)),*]
    };
}

/// Labelled line of the closing overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: &'static str,
}

/// Everything the printer emits: title, tree and overview.
#[derive(Debug, Clone, Copy)]
pub struct Document {
    pub title: &'static str,
    pub entries: &'static [Entry],
    pub overview_heading: &'static str,
    pub summary: &'static [SummaryItem],
}

pub static PROJECT_LAYOUT: &[Entry] = layout! {
    "personal-budget-tracker" => {
        "README.md" => file,
        "package.json" => file,
        "backend" => {
            "package.json" => file,
            "server.js" => file,
            "config" => {
                "database.js" => file,
                "auth.js" => file,
            },
            "models" => {
                "User.js" => file,
                "Transaction.js" => file,
                "Budget.js" => file,
                "Group.js" => file,
            },
            "routes" => {
                "auth.js" => file,
                "transactions.js" => file,
                "budgets.js" => file,
                "groups.js" => file,
                "analytics.js" => file,
            },
            "middleware" => {
                "auth.js" => file,
                "validation.js" => file,
            },
            "controllers" => {
                "authController.js" => file,
                "transactionController.js" => file,
                "budgetController.js" => file,
                "groupController.js" => file,
                "analyticsController.js" => file,
            },
        },
        "frontend" => {
            "package.json" => file,
            "public" => {
                "index.html" => file,
                "manifest.json" => file,
            },
            "src" => {
                "App.js" => file,
                "index.js" => file,
                "components" => {
                    "Dashboard" => {
                        "Dashboard.js" => file,
                        "Dashboard.css" => file,
                    },
                    "Transactions" => {
                        "TransactionForm.js" => file,
                        "TransactionList.js" => file,
                        "TransactionItem.js" => file,
                    },
                    "Budgets" => {
                        "BudgetForm.js" => file,
                        "BudgetList.js" => file,
                        "BudgetProgress.js" => file,
                    },
                    "Groups" => {
                        "GroupDashboard.js" => file,
                        "GroupForm.js" => file,
                        "ExpenseSplit.js" => file,
                        "SettleBalance.js" => file,
                    },
                    "Charts" => {
                        "ExpenseChart.js" => file,
                        "BudgetChart.js" => file,
                        "TrendChart.js" => file,
                    },
                    "Auth" => {
                        "Login.js" => file,
                        "Register.js" => file,
                        "AuthForm.css" => file,
                    },
                    "Common" => {
                        "Navbar.js" => file,
                        "Footer.js" => file,
                        "LoadingSpinner.js" => file,
                    },
                },
                "context" => {
                    "AuthContext.js" => file,
                    "BudgetContext.js" => file,
                },
                "utils" => {
                    "api.js" => file,
                    "helpers.js" => file,
                    "constants.js" => file,
                },
                "styles" => {
                    "App.css" => file,
                    "index.css" => file,
                    "variables.css" => file,
                },
            },
        },
        "docs" => {
            "project-specification.md" => file,
            "api-documentation.md" => file,
            "database-design.md" => file,
            "deployment-guide.md" => file,
        },
    },
};

pub static PROJECT_SUMMARY: &[SummaryItem] = &[
    SummaryItem {
        label: "Backend",
        value: "Node.js + Express + MongoDB",
    },
    SummaryItem {
        label: "Frontend",
        value: "React.js + Context API + Chart.js",
    },
    SummaryItem {
        label: "Authentication",
        value: "JWT-based",
    },
    SummaryItem {
        label: "Database",
        value: "MongoDB with Mongoose ODM",
    },
    SummaryItem {
        label: "Styling",
        value: "CSS3 with responsive design",
    },
];

pub static PROJECT_DOCUMENT: Document = Document {
    title: "Personal Budget Tracker Project Structure",
    entries: PROJECT_LAYOUT,
    overview_heading: "Total Structure Overview:",
    summary: PROJECT_SUMMARY,
};
