use clap::{Args as ClapArgs, Parser, Subcommand};
use dagmenu_core::api::{
    ActionKind, MenuFlags, MenuProps, Position, TargetNode, TaskFlag, TaskInstanceRef,
};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Edit,
    Copy,
    Delete,
    ViewLog,
    ClearCache,
    ExecuteOnly,
    ExecuteDownstream,
    ExecuteUpstream,
}

impl From<Action> for ActionKind {
    fn from(a: Action) -> Self {
        match a {
            Action::Start => ActionKind::Start,
            Action::Edit => ActionKind::Edit,
            Action::Copy => ActionKind::Copy,
            Action::Delete => ActionKind::Delete,
            Action::ViewLog => ActionKind::ViewLog,
            Action::ClearCache => ActionKind::ClearInstanceCache,
            Action::ExecuteOnly => ActionKind::ExecuteTaskOnly,
            Action::ExecuteDownstream => ActionKind::ExecuteDownstream,
            Action::ExecuteUpstream => ActionKind::ExecuteUpstream,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArg {
    Yes,
    No,
}

#[derive(Parser, Debug)]
#[command(name = "dagmenu", about = "Drive the DAG node context menu from the terminal")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Explicit config file; defaults to ~/.dagmenu/config.toml then ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Overrides `project_code` from config.
    #[arg(long, global = true)]
    pub project: Option<i64>,

    /// Overrides `workflow_code` from config.
    #[arg(long, global = true)]
    pub workflow: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the entries the menu would show.
    Actions(MenuArgs),
    /// Click one entry and print the resulting events as JSON lines.
    Run(RunArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RunArgs {
    #[arg(value_enum)]
    pub action: Action,

    #[command(flatten)]
    pub menu: MenuArgs,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MenuArgs {
    /// Code of the selected node.
    #[arg(long)]
    pub node: Option<i64>,

    #[arg(long, default_value = "task")]
    pub name: String,

    #[arg(long, default_value = "SHELL")]
    pub task_type: String,

    #[arg(long, value_enum, default_value_t = FlagArg::Yes)]
    pub flag: FlagArg,

    #[arg(long)]
    pub start_display: bool,

    #[arg(long)]
    pub execute_display: bool,

    #[arg(long)]
    pub menu_display: bool,

    /// Open the menu for a task instance with this id.
    #[arg(long)]
    pub instance_id: Option<i64>,

    /// Task type of the instance; defaults to `--task-type`.
    #[arg(long, requires = "instance_id")]
    pub instance_type: Option<String>,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub left: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub top: i32,
}

impl MenuArgs {
    pub fn target_node(&self) -> Option<TargetNode> {
        self.node.map(|code| TargetNode {
            code,
            task_type: self.task_type.clone(),
            task_name: self.name.clone(),
            flag: match self.flag {
                FlagArg::Yes => TaskFlag::On,
                FlagArg::No => TaskFlag::Off,
            },
        })
    }

    pub fn to_props(&self) -> MenuProps {
        MenuProps {
            visible: true,
            position: Position::new(self.left, self.top),
            flags: MenuFlags {
                start_display: self.start_display,
                execute_task_display: self.execute_display,
                menu_display: self.menu_display,
            },
            node: self.target_node(),
            task_instance: self.instance_id.map(|id| TaskInstanceRef {
                id,
                task_type: self
                    .instance_type
                    .clone()
                    .unwrap_or_else(|| self.task_type.clone()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_copy() {
        let args = Args::try_parse_from([
            "dagmenu", "run", "copy", "--node", "42", "--name", "A_task", "--menu-display",
            "--left", "10", "--top", "-5", "--project", "7",
        ])
        .unwrap();

        assert_eq!(args.project, Some(7));
        let Commands::Run(run) = args.command else {
            panic!("expected run");
        };
        assert_eq!(run.action, Action::Copy);
        let props = run.menu.to_props();
        assert_eq!(props.position, Position::new(10, -5));
        assert!(props.flags.menu_display);
        assert_eq!(props.node.unwrap().task_name, "A_task");
        assert!(props.task_instance.is_none());
    }

    #[test]
    fn test_instance_type_requires_instance() {
        assert!(Args::try_parse_from(["dagmenu", "actions", "--instance-type", "SQL"]).is_err());
    }

    #[test]
    fn test_actions_map_to_kinds() {
        assert_eq!(ActionKind::from(Action::ClearCache), ActionKind::ClearInstanceCache);
        assert_eq!(
            ActionKind::from(Action::ExecuteDownstream),
            ActionKind::ExecuteDownstream
        );
    }
}
