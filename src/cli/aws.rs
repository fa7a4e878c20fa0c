//! `aws` command group

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::aws::{ec2, rds};
use crate::config::AxolgoConfig;

#[derive(Args)]
pub struct AwsArgs {
    #[command(subcommand)]
    command: AwsCommands,
}

#[derive(Subcommand)]
enum AwsCommands {
    /// EC2 operations
    Ec2(Ec2Args),

    /// RDS operations
    Rds(RdsArgs),
}

#[derive(Args)]
pub struct Ec2Args {
    #[command(subcommand)]
    command: Ec2Commands,
}

#[derive(Subcommand)]
enum Ec2Commands {
    /// Describe EC2 instances matching the given criteria
    #[command(name = "describeInstances")]
    DescribeInstances(DescribeInstancesArgs),
}

#[derive(Args)]
pub struct DescribeInstancesArgs {
    /// Instance IDs
    #[arg(short = 'i', long = "instance-id", value_name = "ID")]
    instance_ids: Vec<String>,

    /// Private IP addresses
    #[arg(short = 'a', long = "private-ip-address", value_name = "IP")]
    private_ip_addresses: Vec<String>,

    /// Public IP addresses
    #[arg(short = 'b', long = "public-ip-address", value_name = "IP")]
    public_ip_addresses: Vec<String>,

    /// Security group IDs
    #[arg(short = 's', long = "security-group-id", value_name = "SGID")]
    security_group_ids: Vec<String>,

    /// IAM instance profile ARNs
    #[arg(short = 'm', long = "iam-instance-profile-arn", value_name = "ARN")]
    iam_instance_profile_arns: Vec<String>,

    /// Maximum number of records per batch
    #[arg(short = 'r', long = "max-results", value_name = "N")]
    max_results: Option<i32>,
}

#[derive(Args)]
pub struct RdsArgs {
    #[command(subcommand)]
    command: RdsCommands,
}

#[derive(Subcommand)]
enum RdsCommands {
    /// Modify a DB parameter group from a YAML parameter file
    #[command(name = "modifyDBParameterGroup")]
    ModifyDbParameterGroup(ModifyParameterGroupArgs),

    /// Modify a DB cluster parameter group from a YAML parameter file
    #[command(name = "modifyDBClusterParameterGroup")]
    ModifyDbClusterParameterGroup(ModifyParameterGroupArgs),
}

#[derive(Args)]
pub struct ModifyParameterGroupArgs {
    /// Parameter group name
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: String,

    /// YAML file with `static` and `dynamic` parameter buckets
    #[arg(short = 'f', long = "parameter-file", value_name = "FILE")]
    parameter_file: PathBuf,
}

pub async fn run(args: AwsArgs, config: &AxolgoConfig) -> Result<()> {
    match args.command {
        AwsCommands::Ec2(ec2_args) => match ec2_args.command {
            Ec2Commands::DescribeInstances(describe) => {
                let opts = ec2::DescribeInstancesOptions {
                    instance_ids: describe.instance_ids,
                    private_ip_addresses: describe.private_ip_addresses,
                    public_ip_addresses: describe.public_ip_addresses,
                    security_group_ids: describe.security_group_ids,
                    iam_instance_profile_arns: describe.iam_instance_profile_arns,
                    max_results: describe.max_results,
                };
                ec2::describe_instances(opts, config).await?;
                Ok(())
            }
        },
        AwsCommands::Rds(rds_args) => {
            let (kind, modify) = match rds_args.command {
                RdsCommands::ModifyDbParameterGroup(modify) => {
                    (rds::ParameterGroupKind::Instance, modify)
                }
                RdsCommands::ModifyDbClusterParameterGroup(modify) => {
                    (rds::ParameterGroupKind::Cluster, modify)
                }
            };
            rds::modify_parameter_group(kind, &modify.name, &modify.parameter_file, config).await
        }
    }
}
