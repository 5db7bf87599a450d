use anchor_lang::solana_program::pubkey::Pubkey;
use std::str::FromStr;

use crate::utils::hash_leaf;

#[derive(Debug, Clone)]
struct TreeNode {
    index: u64,
    account: Pubkey,
    amount: u64,
}

/// Host-side merkle tree over (index, account, amount) leaves
///
/// Builds the same sorted-pair tree the off-chain artifact generator
/// produces, so proofs made here are exactly what claimers submit. Exists
/// only to exercise `verify`; the production artifact generator is a
/// separate tool.
struct SimpleMerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl SimpleMerkleTree {
    fn new(tree_nodes: Vec<TreeNode>) -> Self {
        let leaf_count = tree_nodes.len();
        let mut nodes = Vec::new();

        for node in tree_nodes {
            nodes.push(hash_leaf(node.index, &node.account, node.amount));
        }

        let mut tree = SimpleMerkleTree { nodes, leaf_count };
        tree.build_tree();
        tree
    }

    fn hash_intermediate(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        use anchor_lang::solana_program::hash::hashv;
        // Same sorted-pair ordering as the on-chain verify function
        if left <= right {
            hashv(&[left, right]).to_bytes()
        } else {
            hashv(&[right, left]).to_bytes()
        }
    }

    fn build_tree(&mut self) {
        let mut level_len = self.next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let prev_level_idx = 2 * i;
                let left_sibling = &self.nodes[prev_level_start + prev_level_idx];
                let right_sibling = if prev_level_idx + 1 < prev_level_len {
                    &self.nodes[prev_level_start + prev_level_idx + 1]
                } else {
                    // Duplicate last entry if odd
                    &self.nodes[prev_level_start + prev_level_idx]
                };

                let hash = Self::hash_intermediate(left_sibling, right_sibling);
                self.nodes.push(hash);
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = self.next_level_len(level_len);
        }
    }

    fn next_level_len(&self, level_len: usize) -> usize {
        if level_len == 1 {
            0
        } else {
            level_len.div_ceil(2)
        }
    }

    fn get_root(&self) -> [u8; 32] {
        self.nodes[self.nodes.len() - 1]
    }

    /// Generates the sibling path for the leaf at `index`
    fn get_proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.leaf_count, "index out of bounds");

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 0 {
                if current_index + 1 < level_len {
                    current_index + 1
                } else {
                    current_index
                }
            } else {
                current_index - 1
            };

            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = self.next_level_len(level_len);
        }

        proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::verify;

    fn get_test_data() -> Vec<TreeNode> {
        vec![
            TreeNode {
                index: 0,
                account: Pubkey::from_str("3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs").unwrap(),
                amount: 1000,
            },
            TreeNode {
                index: 1,
                account: Pubkey::from_str("8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx").unwrap(),
                amount: 2000,
            },
            TreeNode {
                index: 2,
                account: Pubkey::from_str("A4mDtfFCkdt9CqGzEkfiSHhJD8d3bUMasVzwajudGtb2").unwrap(),
                amount: 3000,
            },
            TreeNode {
                index: 3,
                account: Pubkey::from_str("4SX6nqv5VRLMoNfYM5phvHgcBNcBEwUEES4qPPjf1EqS").unwrap(),
                amount: 4000,
            },
        ]
    }

    #[test]
    fn test_get_proof_and_verify() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root();

        for (i, node) in tree_nodes.iter().enumerate() {
            let leaf = hash_leaf(node.index, &node.account, node.amount);
            let proof = merkle_tree.get_proof(i);
            assert!(
                verify(proof, root, leaf),
                "proof verification failed for index {}",
                i
            );
        }
    }

    /// Proof soundness: a triple outside the claim set never verifies,
    /// whatever proof is attached
    #[test]
    fn test_foreign_leaf_rejected() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root();

        let outsider = Pubkey::new_from_array([9u8; 32]);
        let foreign_leaf = hash_leaf(0, &outsider, 1000);

        for i in 0..tree_nodes.len() {
            assert!(!verify(merkle_tree.get_proof(i), root, foreign_leaf));
        }
        assert!(!verify(vec![], root, foreign_leaf));
    }

    /// Tampering with any leaf field invalidates the proof
    #[test]
    fn test_tampered_leaf_rejected() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root();
        let node = &tree_nodes[1];
        let proof = merkle_tree.get_proof(1);

        // amount inflated
        let bad_amount = hash_leaf(node.index, &node.account, node.amount + 1);
        assert!(!verify(proof.clone(), root, bad_amount));

        // index shifted
        let bad_index = hash_leaf(node.index + 10, &node.account, node.amount);
        assert!(!verify(proof.clone(), root, bad_index));

        // proof for a different leaf
        let leaf = hash_leaf(node.index, &node.account, node.amount);
        assert!(!verify(merkle_tree.get_proof(2), root, leaf));
    }

    /// A single-leaf set: the root is the leaf and the proof is empty
    #[test]
    fn test_single_leaf_tree() {
        let account = Pubkey::new_from_array([1u8; 32]);
        let nodes = vec![TreeNode {
            index: 0,
            account,
            amount: 100,
        }];
        let merkle_tree = SimpleMerkleTree::new(nodes);
        let root = merkle_tree.get_root();

        let leaf = hash_leaf(0, &account, 100);
        assert_eq!(root, leaf);
        assert!(verify(vec![], root, leaf));
        assert!(merkle_tree.get_proof(0).is_empty());
    }

    /// Odd leaf counts duplicate the trailing node; every leaf still proves
    #[test]
    fn test_odd_leaf_count() {
        let mut tree_nodes = get_test_data();
        tree_nodes.push(TreeNode {
            index: 4,
            account: Pubkey::new_from_array([5u8; 32]),
            amount: 5000,
        });
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root();

        for (i, node) in tree_nodes.iter().enumerate() {
            let leaf = hash_leaf(node.index, &node.account, node.amount);
            assert!(verify(merkle_tree.get_proof(i), root, leaf));
        }
    }

    /// Two leaves differing only in index hash differently
    #[test]
    fn test_index_separates_leaves() {
        let account = Pubkey::new_from_array([2u8; 32]);
        assert_ne!(hash_leaf(0, &account, 100), hash_leaf(1, &account, 100));
    }
}
