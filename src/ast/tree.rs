//! Generic parse-tree rendering for external consumers.
//!
//! The typed AST is what the parser builds; this module flattens it into a
//! uniform labeled-node shape (`label`, optional terminal `value`, position,
//! ordered children) that serializes with stable field names and prints as
//! an indented tree. Child order is left-to-right derivation order.

use std::fmt::Display;

use serde::Serialize;

use super::{
    expressions::{Expr, ExprKind},
    statements::{
        AlterAction, ColumnConstraint, DropBehavior, Join, OrderItem, SelectItem,
        SelectStatement, Statement, StatementKind, TableConstraintKind, TableRef,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub label: String,
    pub value: Option<String>,
    pub line: u32,
    pub column: u32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>, line: u32, column: u32) -> Self {
        TreeNode {
            label: label.into(),
            value: None,
            line,
            column,
            children: Vec::new(),
        }
    }

    pub fn terminal(
        label: impl Into<String>,
        value: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        TreeNode {
            label: label.into(),
            value: Some(value.into()),
            line,
            column,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match &self.value {
            Some(value) => writeln!(f, "{}{}:'{}'", indent, self.label, value)?,
            None => writeln!(f, "{}{}", indent, self.label)?,
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Statement {
    pub fn to_tree(&self) -> TreeNode {
        let (line, column) = (self.line, self.column);

        match &self.kind {
            StatementKind::Select(select) => select_tree(select, line, column),
            StatementKind::Insert(insert) => {
                let mut node = TreeNode::new("InsertStatement", line, column);
                node.push(table_ref_tree(&insert.table));
                if let Some(columns) = &insert.columns {
                    node.push(column_list_tree(columns, line, column));
                }
                let mut values = TreeNode::new("Values", line, column);
                for row in &insert.rows {
                    let mut row_node = TreeNode::new("Row", line, column);
                    for expr in row {
                        row_node.push(expr.to_tree());
                    }
                    values.push(row_node);
                }
                node.push(values);
                node
            }
            StatementKind::Update(update) => {
                let mut node = TreeNode::new("UpdateStatement", line, column);
                node.push(table_ref_tree(&update.table));
                let mut set = TreeNode::new("SetClause", line, column);
                for assignment in &update.assignments {
                    let mut item = TreeNode::new("Assignment", line, column);
                    item.value = Some(assignment.column.clone());
                    item.push(assignment.value.to_tree());
                    set.push(item);
                }
                node.push(set);
                if let Some(cond) = &update.where_clause {
                    node.push(where_tree(cond));
                }
                node
            }
            StatementKind::Delete(delete) => {
                let mut node = TreeNode::new("DeleteStatement", line, column);
                node.push(table_ref_tree(&delete.table));
                if let Some(cond) = &delete.where_clause {
                    node.push(where_tree(cond));
                }
                node
            }
            StatementKind::CreateTable(create) => {
                let mut node = TreeNode::new("CreateTableStatement", line, column);
                node.value = Some(create.name.clone());
                if create.if_not_exists {
                    node.push(TreeNode::terminal("IfNotExists", "IF NOT EXISTS", line, column));
                }
                for column_def in &create.columns {
                    let mut def = TreeNode::new("ColumnDef", line, column);
                    def.value = Some(column_def.name.clone());
                    def.push(TreeNode::terminal(
                        "Type",
                        column_def.data_type.to_string(),
                        line,
                        column,
                    ));
                    for constraint in &column_def.constraints {
                        def.push(column_constraint_tree(constraint, line, column));
                    }
                    node.push(def);
                }
                for constraint in &create.constraints {
                    let mut c = TreeNode::new("TableConstraint", line, column);
                    c.value = constraint.name.clone();
                    c.push(table_constraint_tree(&constraint.kind, line, column));
                    node.push(c);
                }
                node
            }
            StatementKind::CreateDatabase { name } => {
                TreeNode::terminal("CreateDatabaseStatement", name.clone(), line, column)
            }
            StatementKind::CreateView { name, query } => {
                let mut node = TreeNode::new("CreateViewStatement", line, column);
                node.value = Some(name.clone());
                node.push(select_tree(query, line, column));
                node
            }
            StatementKind::CreateIndex { name, table, columns } => {
                let mut node = TreeNode::new("CreateIndexStatement", line, column);
                node.value = Some(name.clone());
                node.push(TreeNode::terminal("Table", table.clone(), line, column));
                node.push(column_list_tree(columns, line, column));
                node
            }
            StatementKind::AlterTable(alter) => {
                let mut node = TreeNode::new("AlterTableStatement", line, column);
                node.value = Some(alter.table.clone());
                match &alter.action {
                    AlterAction::AddColumn(column_def) => {
                        let mut add = TreeNode::new("AddColumn", line, column);
                        add.value = Some(column_def.name.clone());
                        add.push(TreeNode::terminal(
                            "Type",
                            column_def.data_type.to_string(),
                            line,
                            column,
                        ));
                        for constraint in &column_def.constraints {
                            add.push(column_constraint_tree(constraint, line, column));
                        }
                        node.push(add);
                    }
                    AlterAction::DropColumn(name) => {
                        node.push(TreeNode::terminal("DropColumn", name.clone(), line, column));
                    }
                }
                node
            }
            StatementKind::Drop(drop) => {
                let mut node = TreeNode::new("DropStatement", line, column);
                node.push(TreeNode::terminal("ObjectType", drop.object.label(), line, column));
                node.push(TreeNode::terminal("Name", drop.name.clone(), line, column));
                if drop.if_exists {
                    node.push(TreeNode::terminal("IfExists", "IF EXISTS", line, column));
                }
                if let Some(behavior) = drop.behavior {
                    let text = match behavior {
                        DropBehavior::Cascade => "CASCADE",
                        DropBehavior::Restrict => "RESTRICT",
                    };
                    node.push(TreeNode::terminal("Behavior", text, line, column));
                }
                node
            }
        }
    }
}

fn select_tree(select: &SelectStatement, line: u32, column: u32) -> TreeNode {
    let mut node = TreeNode::new("SelectStatement", line, column);

    if select.distinct {
        node.push(TreeNode::terminal("Distinct", "DISTINCT", line, column));
    }

    let mut list = TreeNode::new("SelectList", line, column);
    for item in &select.columns {
        match item {
            SelectItem::Wildcard => {
                list.push(TreeNode::terminal("Wildcard", "*", line, column));
            }
            SelectItem::Expr { expr, alias: None } => list.push(expr.to_tree()),
            SelectItem::Expr { expr, alias: Some(alias) } => {
                let mut item_node = TreeNode::new("SelectItem", expr.line, expr.column);
                item_node.push(expr.to_tree());
                item_node.push(TreeNode::terminal("Alias", alias.clone(), expr.line, expr.column));
                list.push(item_node);
            }
        }
    }
    node.push(list);

    let mut from = TreeNode::new("FromClause", select.from.line, select.from.column);
    from.push(table_ref_tree(&select.from));
    node.push(from);

    for join in &select.joins {
        node.push(join_tree(join));
    }

    if let Some(cond) = &select.where_clause {
        node.push(where_tree(cond));
    }

    if !select.group_by.is_empty() {
        let first = &select.group_by[0];
        let mut group = TreeNode::new("GroupByClause", first.line, first.column);
        for expr in &select.group_by {
            group.push(expr.to_tree());
        }
        node.push(group);
    }

    if let Some(cond) = &select.having {
        let mut having = TreeNode::new("HavingClause", cond.line, cond.column);
        having.push(cond.to_tree());
        node.push(having);
    }

    if !select.order_by.is_empty() {
        let first = &select.order_by[0];
        let mut order = TreeNode::new("OrderByClause", first.expr.line, first.expr.column);
        for OrderItem { expr, descending } in &select.order_by {
            let mut item = TreeNode::new("OrderItem", expr.line, expr.column);
            item.value = Some(if *descending { "DESC" } else { "ASC" }.to_string());
            item.push(expr.to_tree());
            order.push(item);
        }
        node.push(order);
    }

    if let Some(limit) = &select.limit {
        let mut limit_node = TreeNode::new("LimitClause", limit.line, limit.column);
        limit_node.push(limit.to_tree());
        node.push(limit_node);
    }

    node
}

fn join_tree(join: &Join) -> TreeNode {
    let mut node = TreeNode::new("JoinClause", join.table.line, join.table.column);
    node.value = Some(join.kind.label().to_string());
    node.push(table_ref_tree(&join.table));
    if let Some(on) = &join.on {
        let mut on_node = TreeNode::new("JoinCondition", on.line, on.column);
        on_node.push(on.to_tree());
        node.push(on_node);
    }
    node
}

fn where_tree(cond: &Expr) -> TreeNode {
    let mut node = TreeNode::new("WhereClause", cond.line, cond.column);
    node.push(cond.to_tree());
    node
}

fn table_ref_tree(table: &TableRef) -> TreeNode {
    let mut node = TreeNode::terminal("Table", table.name.clone(), table.line, table.column);
    if let Some(alias) = &table.alias {
        node.value = Some(format!("{} {}", table.name, alias));
    }
    node
}

fn column_list_tree(columns: &[String], line: u32, column: u32) -> TreeNode {
    let mut node = TreeNode::new("ColumnList", line, column);
    for name in columns {
        node.push(TreeNode::terminal("Column", name.clone(), line, column));
    }
    node
}

fn column_constraint_tree(constraint: &ColumnConstraint, line: u32, column: u32) -> TreeNode {
    match constraint {
        ColumnConstraint::PrimaryKey => {
            TreeNode::terminal("Constraint", "PRIMARY KEY", line, column)
        }
        ColumnConstraint::NotNull => TreeNode::terminal("Constraint", "NOT NULL", line, column),
        ColumnConstraint::Unique => TreeNode::terminal("Constraint", "UNIQUE", line, column),
        ColumnConstraint::Default(expr) => {
            let mut node = TreeNode::new("Default", expr.line, expr.column);
            node.push(expr.to_tree());
            node
        }
        ColumnConstraint::References { table, column: target } => {
            let text = match target {
                Some(target) => format!("{}({})", table, target),
                None => table.clone(),
            };
            TreeNode::terminal("References", text, line, column)
        }
        ColumnConstraint::Check(expr) => {
            let mut node = TreeNode::new("Check", expr.line, expr.column);
            node.push(expr.to_tree());
            node
        }
    }
}

fn table_constraint_tree(kind: &TableConstraintKind, line: u32, column: u32) -> TreeNode {
    match kind {
        TableConstraintKind::PrimaryKey(columns) => {
            let mut node = TreeNode::new("PrimaryKey", line, column);
            node.push(column_list_tree(columns, line, column));
            node
        }
        TableConstraintKind::ForeignKey { columns, ref_table, ref_columns } => {
            let mut node = TreeNode::new("ForeignKey", line, column);
            node.push(column_list_tree(columns, line, column));
            let mut target = TreeNode::terminal("References", ref_table.clone(), line, column);
            target.children = vec![column_list_tree(ref_columns, line, column)];
            node.push(target);
            node
        }
        TableConstraintKind::Unique(columns) => {
            let mut node = TreeNode::new("Unique", line, column);
            node.push(column_list_tree(columns, line, column));
            node
        }
        TableConstraintKind::Check(expr) => {
            let mut node = TreeNode::new("Check", expr.line, expr.column);
            node.push(expr.to_tree());
            node
        }
    }
}

impl Expr {
    pub fn to_tree(&self) -> TreeNode {
        let (line, column) = (self.line, self.column);

        match &self.kind {
            ExprKind::Integer(value) => {
                TreeNode::terminal("Integer", value.to_string(), line, column)
            }
            ExprKind::Float(value) => TreeNode::terminal("Float", value.to_string(), line, column),
            ExprKind::String(value) => TreeNode::terminal("String", value.clone(), line, column),
            ExprKind::Boolean(value) => {
                TreeNode::terminal("Boolean", if *value { "TRUE" } else { "FALSE" }, line, column)
            }
            ExprKind::Null => TreeNode::terminal("Null", "NULL", line, column),
            ExprKind::Column { table, name } => {
                let text = match table {
                    Some(table) => format!("{}.{}", table, name),
                    None => name.clone(),
                };
                TreeNode::terminal("ColumnRef", text, line, column)
            }
            ExprKind::Wildcard => TreeNode::terminal("Wildcard", "*", line, column),
            ExprKind::Function { name, distinct, args } => {
                let mut node = TreeNode::new("FunctionCall", line, column);
                node.value = Some(name.clone());
                if *distinct {
                    node.push(TreeNode::terminal("Distinct", "DISTINCT", line, column));
                }
                for arg in args {
                    node.push(arg.to_tree());
                }
                node
            }
            ExprKind::Cast { expr, data_type } => {
                let mut node = TreeNode::new("Cast", line, column);
                node.push(expr.to_tree());
                node.push(TreeNode::terminal("Type", data_type.to_string(), line, column));
                node
            }
            ExprKind::Negate(expr) => {
                let mut node = TreeNode::new("Negate", line, column);
                node.push(expr.to_tree());
                node
            }
            ExprKind::Binary { left, operator, right } => {
                TreeNode::new("Arithmetic", line, column).with_children(vec![
                    left.to_tree(),
                    TreeNode::terminal("Terminal", operator.symbol(), line, column),
                    right.to_tree(),
                ])
            }
            ExprKind::Comparison { left, operator, right } => {
                TreeNode::new("Comparison", line, column).with_children(vec![
                    left.to_tree(),
                    TreeNode::terminal("Terminal", operator.symbol(), line, column),
                    right.to_tree(),
                ])
            }
            ExprKind::And { left, right } => TreeNode::new("And", line, column)
                .with_children(vec![left.to_tree(), right.to_tree()]),
            ExprKind::Or { left, right } => TreeNode::new("Or", line, column)
                .with_children(vec![left.to_tree(), right.to_tree()]),
            ExprKind::Not(expr) => {
                TreeNode::new("Not", line, column).with_children(vec![expr.to_tree()])
            }
            ExprKind::Between { expr, negated, low, high } => {
                let mut node = TreeNode::new("Between", line, column);
                if *negated {
                    node.value = Some(String::from("NOT"));
                }
                node.children = vec![expr.to_tree(), low.to_tree(), high.to_tree()];
                node
            }
            ExprKind::InList { expr, negated, list } => {
                let mut node = TreeNode::new("InList", line, column);
                if *negated {
                    node.value = Some(String::from("NOT"));
                }
                node.push(expr.to_tree());
                for item in list {
                    node.push(item.to_tree());
                }
                node
            }
            ExprKind::Like { expr, negated, pattern } => {
                let mut node = TreeNode::new("Like", line, column);
                if *negated {
                    node.value = Some(String::from("NOT"));
                }
                node.children = vec![expr.to_tree(), pattern.to_tree()];
                node
            }
            ExprKind::IsNull { expr, negated } => {
                let mut node = TreeNode::new("IsNull", line, column);
                if *negated {
                    node.value = Some(String::from("NOT"));
                }
                node.push(expr.to_tree());
                node
            }
        }
    }
}
