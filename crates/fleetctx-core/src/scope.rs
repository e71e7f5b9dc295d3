//! Organizational scope resolution.
//!
//! `OrgTree` answers hierarchy questions about a point-in-time list of
//! organizations; `ScopeFilter` is the `{company, division, department,
//! terminal}` descriptor built from the current organization and applied to
//! any collection of [`Scoped`] entities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::traits::Scoped;
use crate::types::{OrgContext, OrgId, Organization, OrganizationType, PermissionScope};

/// Longest chain a well-formed tree can produce.
pub const MAX_DEPTH: usize = OrganizationType::ALL.len();

#[derive(Debug, Clone, Default)]
pub struct OrgTree {
    nodes: Vec<Organization>,
    by_id: HashMap<OrgId, usize>,
}

impl OrgTree {
    pub fn new(nodes: Vec<Organization>) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            // first occurrence wins, like a linear `find`
            by_id.entry(node.id.clone()).or_insert(i);
        }
        Self { nodes, by_id }
    }

    pub fn nodes(&self) -> &[Organization] { &self.nodes }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn get(&self, id: &str) -> Option<&Organization> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    /// Walks `parent_id` links upward from `id`.
    ///
    /// The chain is leaf-first and starts with the node itself. An unknown id
    /// yields an empty chain. The walk stops at a dangling parent and never
    /// returns more than [`MAX_DEPTH`] nodes.
    pub fn ancestor_chain(&self, id: &str) -> Vec<&Organization> {
        let mut chain = Vec::with_capacity(MAX_DEPTH);
        let mut current = self.get(id);
        while let Some(node) = current {
            if chain.len() == MAX_DEPTH {
                warn!(org_id = id, "organization chain exceeds hierarchy depth, truncating");
                break;
            }
            chain.push(node);
            current = node.parent_id.as_deref().and_then(|p| self.get(p));
        }
        chain
    }

    /// Ancestors of `id`, root-first, excluding the node itself.
    pub fn parents(&self, id: &str) -> Vec<&Organization> {
        let mut chain = self.ancestor_chain(id);
        if !chain.is_empty() {
            chain.remove(0);
        }
        chain.reverse();
        chain
    }

    pub fn children(&self, id: &str) -> Vec<&Organization> {
        self.nodes.iter().filter(|n| n.parent_id.as_deref() == Some(id)).collect()
    }

    pub fn by_type(&self, kind: OrganizationType) -> Vec<&Organization> {
        self.nodes.iter().filter(|n| n.kind == kind).collect()
    }

    /// Builds the filter for the organization currently in view.
    ///
    /// Each level is set to the first node of that type on the ancestor chain.
    /// An unresolved id gives an empty filter, which matches everything.
    pub fn build_filter(&self, current_id: &str) -> ScopeFilter {
        let chain = self.ancestor_chain(current_id);
        let first_of = |kind: OrganizationType| {
            chain.iter().find(|n| n.kind == kind).map(|n| n.id.clone())
        };
        ScopeFilter {
            company_id: first_of(OrganizationType::Company),
            division_id: first_of(OrganizationType::Division),
            department_id: first_of(OrganizationType::Department),
            terminal_id: first_of(OrganizationType::Terminal),
        }
    }

    /// Visibility level implied by the current organization, `Own` when there
    /// is none or it cannot be resolved.
    pub fn data_scope(&self, current_id: Option<&str>) -> PermissionScope {
        current_id
            .and_then(|id| self.get(id))
            .map_or(PermissionScope::Own, |n| PermissionScope::from(n.kind))
    }
}

/// Organizational filter. A `None` level is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<OrgId>,
}

impl ScopeFilter {
    pub fn is_empty(&self) -> bool {
        OrganizationType::ALL.iter().all(|&k| self.level(k).is_none())
    }

    pub fn level(&self, kind: OrganizationType) -> Option<&str> {
        match kind {
            OrganizationType::Company => self.company_id.as_deref(),
            OrganizationType::Division => self.division_id.as_deref(),
            OrganizationType::Department => self.department_id.as_deref(),
            OrganizationType::Terminal => self.terminal_id.as_deref(),
        }
    }

    /// Fail-open match: an entity without a context, or without a value at a
    /// constrained level, stays visible. Only a present, different id excludes.
    pub fn matches(&self, context: Option<&OrgContext>) -> bool {
        let Some(context) = context else { return true };
        OrganizationType::ALL.iter().all(|&kind| match (self.level(kind), context.level(kind)) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        })
    }

    /// Keeps the entities in scope, preserving input order.
    pub fn apply<'a, T: Scoped>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item.org_context())).collect()
    }
}
