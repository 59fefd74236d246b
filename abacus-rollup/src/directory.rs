use std::collections::HashMap;

use abacus_core::{Account, AccountCode};

use crate::error::ValidationError;

/// An immutable, validated view of the chart of accounts.
///
/// Built once per session, or per fiscal-year selection, from the flat
/// account list the account source supplies.  Validation happens entirely
/// at load time so the tree queries the roll-up relies on can be answered
/// without rechecking anything: parent references resolve, parent chains
/// terminate, leaf flags agree with the edge set, and every child sits at
/// a strictly greater level than its parent.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountDirectory<'a> {
    /// All accounts, sorted by code.
    accounts: Vec<Account<'a>>,
    by_code: HashMap<AccountCode<'a>, usize>,
    children: HashMap<AccountCode<'a>, Vec<usize>>,
    /// Non-leaf account indices, level descending, code ascending.
    rollup_order: Vec<usize>,
}

impl<'a> AccountDirectory<'a> {
    /// Validates and indexes a flat account list.
    ///
    /// All-or-nothing: a duplicate code, a dangling parent reference, a
    /// parent cycle, a leaf flag contradicting the edge set, or a level
    /// inversion rejects the whole load and leaves nothing behind.
    pub fn load(mut accounts: Vec<Account<'a>>) -> Result<Self, ValidationError> {
        accounts.sort_by(|a, b| a.code.cmp(&b.code));

        let mut by_code = HashMap::with_capacity(accounts.len());
        for (idx, account) in accounts.iter().enumerate() {
            if by_code.insert(account.code.clone(), idx).is_some() {
                return Err(ValidationError::DuplicateCode(account.code.to_string()));
            }
        }

        let mut children: HashMap<AccountCode<'a>, Vec<usize>> = HashMap::new();
        for (idx, account) in accounts.iter().enumerate() {
            let parent_code = match &account.parent_code {
                Some(code) => code,
                None => continue,
            };
            let parent_idx =
                *by_code
                    .get(parent_code.as_ref())
                    .ok_or_else(|| ValidationError::UnknownParent {
                        code: account.code.to_string(),
                        parent: parent_code.to_string(),
                    })?;
            let parent = &accounts[parent_idx];
            if parent.is_leaf {
                return Err(ValidationError::LeafWithChildren {
                    parent: parent.code.to_string(),
                    code: account.code.to_string(),
                });
            }
            children.entry(parent.code.clone()).or_default().push(idx);
        }

        // Parent chains must terminate before levels can be trusted.
        for account in accounts.iter() {
            let mut steps = 0;
            let mut cursor = account;
            while let Some(parent_code) = &cursor.parent_code {
                cursor = &accounts[by_code[parent_code.as_ref()]];
                steps += 1;
                if steps > accounts.len() {
                    return Err(ValidationError::ParentCycle(account.code.to_string()));
                }
            }
        }

        for account in accounts.iter() {
            if let Some(parent_code) = &account.parent_code {
                let parent = &accounts[by_code[parent_code.as_ref()]];
                if account.level <= parent.level {
                    return Err(ValidationError::LevelInversion {
                        code: account.code.to_string(),
                        level: account.level,
                        parent: parent.code.to_string(),
                        parent_level: parent.level,
                    });
                }
            }
        }

        let mut rollup_order: Vec<usize> = (0..accounts.len())
            .filter(|&idx| !accounts[idx].is_leaf)
            .collect();
        rollup_order.sort_by(|&a, &b| {
            accounts[b]
                .level
                .cmp(&accounts[a].level)
                .then_with(|| accounts[a].code.cmp(&accounts[b].code))
        });

        log::debug!(
            "loaded {} accounts ({} non-leaf)",
            accounts.len(),
            rollup_order.len()
        );

        Ok(AccountDirectory {
            accounts,
            by_code,
            children,
            rollup_order,
        })
    }

    /// The account registered under `code`, if any.
    pub fn get(&self, code: &str) -> Option<&Account<'a>> {
        self.by_code.get(code).map(move |&idx| &self.accounts[idx])
    }

    /// Whether `code` names a leaf account; unknown codes are not leaves.
    pub fn is_leaf(&self, code: &str) -> bool {
        self.get(code).map_or(false, |account| account.is_leaf)
    }

    /// Direct children of `code`, in code order; empty for childless or
    /// unknown codes.
    pub fn children_of<'s>(&'s self, code: &str) -> impl Iterator<Item = &'s Account<'a>> {
        self.children
            .get(code)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.accounts[idx])
    }

    /// Every non-leaf account, deepest level first, ties broken by code.
    ///
    /// Visiting parents in this order guarantees each one is reached only
    /// after every account below it, which is what lets the roll-up finish
    /// in a single pass.
    pub fn non_leaf_by_descending_level<'s>(&'s self) -> impl Iterator<Item = &'s Account<'a>> {
        self.rollup_order.iter().map(move |&idx| &self.accounts[idx])
    }

    /// All accounts in code order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account<'a>> {
        self.accounts.iter()
    }

    /// Leaf accounts in code order, the set an entry form offers for
    /// posting.
    pub fn leaf_accounts(&self) -> impl Iterator<Item = &Account<'a>> {
        self.accounts.iter().filter(|account| account.is_leaf)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
